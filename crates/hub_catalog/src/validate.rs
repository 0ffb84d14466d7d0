use std::collections::HashSet;

use hub_core::{CatalogItem, Category, SpaceType, VirtualSpace};
use thiserror::Error;

use crate::records::SpaceRecord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogIssue {
    #[error("duplicate {collection} id {id:?}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    #[error("{collection} entry {id:?} references unknown category {category:?}")]
    UnknownCategory {
        collection: &'static str,
        id: String,
        category: String,
    },
    #[error("game {id:?} has rating {rating} outside 0..=5")]
    RatingOutOfRange { id: String, rating: f32 },
}

/// Every invariant violation in `games`, in collection order.
pub fn validate_games(categories: &[Category], games: &[CatalogItem]) -> Vec<CatalogIssue> {
    let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();
    games
        .iter()
        .filter_map(|game| check_game(&known, &mut seen, game))
        .collect()
}

/// Keeps the games that satisfy every invariant; the first occurrence of a
/// duplicated id wins.
pub fn sanitize_games(
    categories: &[Category],
    games: Vec<CatalogItem>,
) -> (Vec<CatalogItem>, Vec<CatalogIssue>) {
    let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    let kept = games
        .into_iter()
        .filter(|game| match check_game(&known, &mut seen, game) {
            Some(issue) => {
                issues.push(issue);
                false
            }
            None => true,
        })
        .collect();
    (kept, issues)
}

fn check_game(
    known: &HashSet<&str>,
    seen: &mut HashSet<String>,
    game: &CatalogItem,
) -> Option<CatalogIssue> {
    if !(0.0..=5.0).contains(&game.rating) {
        return Some(CatalogIssue::RatingOutOfRange {
            id: game.id.clone(),
            rating: game.rating,
        });
    }
    if !known.contains(game.category.as_str()) {
        return Some(CatalogIssue::UnknownCategory {
            collection: "game",
            id: game.id.clone(),
            category: game.category.clone(),
        });
    }
    if !seen.insert(game.id.clone()) {
        return Some(CatalogIssue::DuplicateId {
            collection: "game",
            id: game.id.clone(),
        });
    }
    None
}

/// Resolves space types and drops records with unknown types or repeated ids.
pub(crate) fn sanitize_space_records(
    records: Vec<SpaceRecord>,
) -> (Vec<VirtualSpace>, Vec<CatalogIssue>) {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        let Some(space_type) = SpaceType::parse(&record.space_type) else {
            issues.push(CatalogIssue::UnknownCategory {
                collection: "space",
                id: record.id,
                category: record.space_type,
            });
            continue;
        };
        if !seen.insert(record.id.clone()) {
            issues.push(CatalogIssue::DuplicateId {
                collection: "space",
                id: record.id,
            });
            continue;
        }
        kept.push(VirtualSpace {
            id: record.id,
            name: record.name,
            icon: record.icon,
            space_type,
            description: record.description,
            members: record.members,
            active_now: record.active_now,
            featured: record.featured,
            premium: record.premium,
        });
    }
    (kept, issues)
}
