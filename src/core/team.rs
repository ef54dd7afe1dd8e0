//! Teams, roles and per-team data storage.
//!
//! ## TeamColor
//!
//! The two sides of a match. Every other per-side value is stored in a
//! `TeamMap`, indexed by `TeamColor` with O(1) access.
//!
//! ## Team
//!
//! A team's roster plus its progress: how many of its words exist on the
//! board (`target_word_count`) and how many have been revealed so far.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    /// Both colors, Red first.
    pub const ALL: [TeamColor; 2] = [TeamColor::Red, TeamColor::Blue];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
        }
    }

    /// Storage index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamColor::Red => 0,
            TeamColor::Blue => 1,
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::Red => f.write_str("Red"),
            TeamColor::Blue => f.write_str("Blue"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ```
/// use word_detective::core::{TeamColor, TeamMap};
///
/// let mut found: TeamMap<u32> = TeamMap::with_value(0);
/// found[TeamColor::Blue] += 1;
/// assert_eq!(found[TeamColor::Red], 0);
/// assert_eq!(found[TeamColor::Blue], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TeamColor) -> T) -> Self {
        Self {
            data: [factory(TeamColor::Red), factory(TeamColor::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map from explicit Red and Blue values.
    pub fn from_pair(red: T, blue: T) -> Self {
        Self { data: [red, blue] }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamColor) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamColor) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamColor, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (TeamColor, &T)> {
        TeamColor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<TeamColor> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamColor) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamColor> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamColor) -> &mut Self::Output {
        self.get_mut(team)
    }
}

/// What a player does for their team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Sees the key card and gives clues.
    Chief,
    /// Picks cards to reveal.
    Detective,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Chief => f.write_str("Chief"),
            Role::Detective => f.write_str("Detective"),
        }
    }
}

/// A named participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    #[must_use]
    pub fn chief(name: impl Into<String>) -> Self {
        Self::new(name, Role::Chief)
    }

    #[must_use]
    pub fn detective(name: impl Into<String>) -> Self {
        Self::new(name, Role::Detective)
    }
}

/// Roster handed to the engine when a match starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub players: Vec<Player>,
}

impl TeamConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Shorthand for a Chief plus one Detective.
    #[must_use]
    pub fn pair(chief: impl Into<String>, detective: impl Into<String>) -> Self {
        Self::new()
            .with_player(Player::chief(chief))
            .with_player(Player::detective(detective))
    }
}

/// A team's roster and progress during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub color: TeamColor,
    pub players: Vec<Player>,
    /// How many cards on the board this team owns.
    pub target_word_count: u32,
    /// How many of those have been revealed.
    pub words_found: u32,
}

impl Team {
    #[must_use]
    pub fn new(color: TeamColor, config: TeamConfig, target_word_count: u32) -> Self {
        Self {
            color,
            players: config.players,
            target_word_count,
            words_found: 0,
        }
    }

    #[must_use]
    pub fn words_remaining(&self) -> u32 {
        self.target_word_count.saturating_sub(self.words_found)
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.words_found >= self.target_word_count
    }

    /// Record one of this team's words being revealed.
    ///
    /// Saturates at `target_word_count`.
    pub fn record_found(&mut self) {
        if self.words_found < self.target_word_count {
            self.words_found += 1;
        }
    }

    /// Players holding the given role.
    pub fn players_with(&self, role: Role) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.role == role)
    }

    /// The first role a complete team needs but this roster lacks.
    ///
    /// Chief is checked before Detective.
    #[must_use]
    pub fn missing_role(&self) -> Option<Role> {
        [Role::Chief, Role::Detective]
            .into_iter()
            .find(|&role| self.players_with(role).next().is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_color_other() {
        assert_eq!(TeamColor::Red.other(), TeamColor::Blue);
        assert_eq!(TeamColor::Blue.other(), TeamColor::Red);
        assert_eq!(format!("{}", TeamColor::Red), "Red");
    }

    #[test]
    fn test_team_map_new() {
        let map: TeamMap<usize> = TeamMap::new(|t| t.index() * 10);
        assert_eq!(map[TeamColor::Red], 0);
        assert_eq!(map[TeamColor::Blue], 10);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<i32> = TeamMap::with_value(0);
        map[TeamColor::Red] = 9;
        map[TeamColor::Blue] = 8;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamColor::Red, &9), (TeamColor::Blue, &8)]);
    }

    #[test]
    fn test_team_map_serialization() {
        let map = TeamMap::from_pair("red".to_string(), "blue".to_string());
        let json = serde_json::to_string(&map).unwrap();
        let back: TeamMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    fn test_team_missing_role() {
        let team = |config| Team::new(TeamColor::Red, config, 9);
        assert_eq!(team(TeamConfig::new()).missing_role(), Some(Role::Chief));

        let only_detective = TeamConfig::new().with_player(Player::detective("Grace"));
        assert_eq!(team(only_detective).missing_role(), Some(Role::Chief));

        let only_chief = TeamConfig::new().with_player(Player::chief("Ada"));
        assert_eq!(team(only_chief).missing_role(), Some(Role::Detective));

        assert_eq!(team(TeamConfig::pair("Ada", "Grace")).missing_role(), None);
    }

    #[test]
    fn test_team_progress() {
        let mut team = Team::new(TeamColor::Red, TeamConfig::pair("Ada", "Grace"), 2);
        assert_eq!(team.words_remaining(), 2);
        assert!(!team.has_won());

        team.record_found();
        team.record_found();
        assert!(team.has_won());

        // Never exceeds the target
        team.record_found();
        assert_eq!(team.words_found, 2);
        assert_eq!(team.words_remaining(), 0);
    }

    #[test]
    fn test_players_with_role() {
        let config = TeamConfig::pair("Ada", "Grace").with_player(Player::detective("Alan"));
        let team = Team::new(TeamColor::Blue, config, 8);
        assert_eq!(team.players_with(Role::Detective).count(), 2);
        assert_eq!(team.players_with(Role::Chief).count(), 1);
    }
}
