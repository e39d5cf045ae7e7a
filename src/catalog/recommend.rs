use std::collections::HashMap;

use crate::model::Artist;

/// How many favourite artists are asked for similar artists.
pub const MAX_RECOMMENDATION_SOURCES: usize = 5;

/// Merges the similar-artist lists of several favourites into one ranking.
///
/// Artists suggested by more favourites rank higher; ties keep the order in
/// which they were first suggested. Artists already in the local library are
/// left out.
pub fn rank_recommendations(local: &[Artist], similar: Vec<Vec<Artist>>) -> Vec<Artist> {
    let mut scores: HashMap<String, (usize, usize)> = HashMap::new();
    let mut ranked: Vec<Artist> = Vec::new();

    for artist in similar.into_iter().flatten() {
        let Some(id) = artist.id.clone() else {
            continue;
        };
        if local.iter().any(|l| l.is_same(&artist) || l.name.eq_ignore_ascii_case(&artist.name)) {
            continue;
        }

        match scores.get_mut(&id) {
            Some((hits, _)) => *hits += 1,
            None => {
                scores.insert(id, (1, ranked.len()));
                ranked.push(artist);
            }
        }
    }

    ranked.sort_by_key(|artist| {
        let (hits, first_seen) = artist
            .id
            .as_ref()
            .and_then(|id| scores.get(id))
            .copied()
            .unwrap_or_default();
        (std::cmp::Reverse(hits), first_seen)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artists_suggested_more_often_rank_first() {
        let local = vec![Artist::with_id("1", "Queen"), Artist::with_id("2", "Yes")];
        let similar = vec![
            vec![Artist::with_id("10", "Genesis"), Artist::with_id("11", "Rush")],
            vec![Artist::with_id("11", "Rush"), Artist::with_id("12", "Kansas")],
        ];

        let ranked = rank_recommendations(&local, similar);
        let names: Vec<_> = ranked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Rush", "Genesis", "Kansas"]);
    }

    #[test]
    fn local_artists_are_not_recommended() {
        let local = vec![Artist::local("Rush", 7)];
        let similar = vec![vec![
            Artist::with_id("11", "Rush"),
            Artist::with_id("12", "Kansas"),
        ]];

        let ranked = rank_recommendations(&local, similar);
        assert_eq!(ranked, vec![Artist::with_id("12", "Kansas")]);
    }
}
