/// The six selectable lists of the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainList {
    LocalAudio,
    Recommendations,
    NewReleases,
    TopArtists,
    Genres,
    MixGroups,
}

impl MainList {
    pub const ALL: [MainList; 6] = [
        MainList::LocalAudio,
        MainList::Recommendations,
        MainList::NewReleases,
        MainList::TopArtists,
        MainList::Genres,
        MainList::MixGroups,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "local" | "favourites" | "favorites" => Some(MainList::LocalAudio),
            "recommended" | "recommendations" => Some(MainList::Recommendations),
            "new" | "releases" => Some(MainList::NewReleases),
            "top" => Some(MainList::TopArtists),
            "genre" | "genres" => Some(MainList::Genres),
            "mix" | "mixes" => Some(MainList::MixGroups),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Main,
    ArtistDetail,
    TopArtistsForGenre,
    Mixes,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    Select(MainList, usize),
    SetPanoramaIndex(usize),
    OpenAbout,
    GoBack,
}
