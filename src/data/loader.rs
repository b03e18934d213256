//! Turn validated static data into runtime structures.
//!
//! Roles from both the board (extras) and the deck (starring roles) are
//! allocated in the same `RoleTable`.

use super::schema::{BoardData, CardData, LocationData, RoleData};
use crate::board::{Board, Location, LocationKind, SetState, Upgrade};
use crate::cards::{CardRegistry, Role, RoleKind, RoleTable, SceneCard};
use crate::core::{ConfigError, MAX_RANK, MIN_RANK};

/// Build the board, allocating extra roles in `roles`.
///
/// # Errors
///
/// Any structural problem with the board, see `Board::build`, plus
/// out-of-range role and upgrade levels.
pub fn build_board(data: &BoardData, roles: &mut RoleTable) -> Result<Board, ConfigError> {
    let mut entries = Vec::with_capacity(data.locations.len());

    for location in &data.locations {
        let kind = match location {
            LocationData::Plain { .. } => LocationKind::Rest,
            LocationData::Shooting { takes, parts, .. } => {
                let extras = parts
                    .iter()
                    .map(|part| alloc_role(roles, part, RoleKind::Extra))
                    .collect::<Result<Vec<_>, _>>()?;
                LocationKind::Set(SetState::new(*takes, extras))
            }
            LocationData::Office { upgrades, .. } => {
                let upgrades = upgrades
                    .iter()
                    .map(|u| {
                        if !(MIN_RANK + 1..=MAX_RANK).contains(&u.level) {
                            return Err(ConfigError::InvalidUpgradeLevel(u.level));
                        }
                        Ok(Upgrade {
                            level: u.level,
                            currency: u.currency,
                            cost: u.cost,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                LocationKind::Office(upgrades)
            }
        };

        entries.push((
            Location::new(location.name(), kind),
            location.neighbors().to_vec(),
        ));
    }

    Board::build(entries)
}

/// Build the deck, allocating starring roles in `roles`.
///
/// # Errors
///
/// Fails on an empty deck, a budget outside 1-6 or a role level outside 1-6.
pub fn build_deck(cards: &[CardData], roles: &mut RoleTable) -> Result<CardRegistry, ConfigError> {
    if cards.is_empty() {
        return Err(ConfigError::EmptyDeck);
    }

    let mut registry = CardRegistry::new();
    for card in cards {
        if !(1..=6).contains(&card.budget) {
            return Err(ConfigError::InvalidBudget {
                card: card.name.clone(),
                budget: card.budget,
            });
        }

        let starring = card
            .parts
            .iter()
            .map(|part| alloc_role(roles, part, RoleKind::Starring))
            .collect::<Result<Vec<_>, _>>()?;

        registry.register_with(|id| {
            let mut scene = SceneCard::new(id, card.name.as_str(), card.budget, card.scene)
                .with_description(card.description.as_str());
            scene.roles.extend(starring);
            scene
        });
    }

    Ok(registry)
}

fn alloc_role(
    roles: &mut RoleTable,
    part: &RoleData,
    kind: RoleKind,
) -> Result<crate::cards::RoleId, ConfigError> {
    if !(MIN_RANK..=MAX_RANK).contains(&part.level) {
        return Err(ConfigError::InvalidRoleLevel {
            role: part.name.clone(),
            level: part.level,
        });
    }
    Ok(roles.insert(Role::new(
        part.name.as_str(),
        part.level,
        part.line.as_str(),
        kind,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Currency;
    use crate::data::UpgradeData;

    fn role(name: &str, level: u8) -> RoleData {
        RoleData {
            name: name.to_string(),
            level,
            line: String::new(),
        }
    }

    fn board_data(office_level: u8) -> BoardData {
        BoardData {
            locations: vec![
                LocationData::Plain {
                    name: "Trailer".into(),
                    neighbors: vec!["Jail".into()],
                },
                LocationData::Shooting {
                    name: "Jail".into(),
                    neighbors: vec!["Office".into()],
                    takes: 1,
                    parts: vec![role("Prisoner in Cell", 2), role("Feller in Irons", 3)],
                },
                LocationData::Office {
                    name: "Office".into(),
                    neighbors: vec![],
                    upgrades: vec![UpgradeData {
                        level: office_level,
                        currency: Currency::Dollar,
                        cost: 4,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_build_board_allocates_extras() {
        let mut roles = RoleTable::new();
        let board = build_board(&board_data(2), &mut roles).unwrap();

        let jail = board.find("jail").unwrap();
        let extras = board.set(jail).unwrap().extras();
        assert_eq!(extras.len(), 2);
        assert_eq!(roles.get(extras[1]).name, "Feller in Irons");
        assert_eq!(roles.get(extras[1]).kind, RoleKind::Extra);
        assert!(board.get(board.office()).find_upgrade(2, Currency::Dollar).is_some());
    }

    #[test]
    fn test_upgrade_level_range() {
        let mut roles = RoleTable::new();
        let err = build_board(&board_data(1), &mut roles).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUpgradeLevel(1)));

        let err = build_board(&board_data(7), &mut roles).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUpgradeLevel(7)));
    }

    #[test]
    fn test_build_deck() {
        let mut roles = RoleTable::new();
        let cards = vec![CardData {
            name: "Ghost Town".into(),
            budget: 3,
            scene: 12,
            description: "Dust everywhere.".into(),
            parts: vec![role("Old Timer", 1), role("Ghost", 3)],
        }];

        let registry = build_deck(&cards, &mut roles).unwrap();
        let card = registry.iter().next().unwrap();
        assert_eq!(card.roles.len(), 2);
        assert_eq!(roles.get(card.roles[1]).kind, RoleKind::Starring);
        assert_eq!(roles.get(card.roles[1]).level, 3);
    }

    #[test]
    fn test_deck_validation() {
        let mut roles = RoleTable::new();
        assert!(matches!(build_deck(&[], &mut roles), Err(ConfigError::EmptyDeck)));

        let bad_budget = vec![CardData {
            name: "Free Lunch".into(),
            budget: 0,
            scene: 1,
            description: String::new(),
            parts: vec![],
        }];
        assert!(matches!(
            build_deck(&bad_budget, &mut roles),
            Err(ConfigError::InvalidBudget { budget: 0, .. })
        ));

        let bad_role = vec![CardData {
            name: "Big Shot".into(),
            budget: 4,
            scene: 2,
            description: String::new(),
            parts: vec![role("Tycoon", 7)],
        }];
        assert!(matches!(
            build_deck(&bad_role, &mut roles),
            Err(ConfigError::InvalidRoleLevel { level: 7, .. })
        ));
    }
}
