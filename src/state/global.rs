//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the display records
//! consumed from the Gambit REST API.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The signed-in user, once the session fetch lands
    pub viewer: RwSignal<Option<UserProfile>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// The game-speed categories the platform tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Bullet,
    Blitz,
    Rapid,
    Classical,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Bullet,
        GameMode::Blitz,
        GameMode::Rapid,
        GameMode::Classical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Bullet => "Bullet",
            GameMode::Blitz => "Blitz",
            GameMode::Rapid => "Rapid",
            GameMode::Classical => "Classical",
        }
    }
}

/// A user record as served by the API
///
/// Fetched read-mostly; the settings page mutates an in-memory copy and
/// replaces the whole record server-side on save.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar as a data URL
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub member_since: Option<i64>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub playing: bool,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub stats: ModeStatsSet,
    #[serde(default)]
    pub digi_quiz: DigiQuizStats,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// Per-mode ratings
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Ratings {
    #[serde(default)]
    pub bullet: i64,
    #[serde(default)]
    pub blitz: i64,
    #[serde(default)]
    pub rapid: i64,
    #[serde(default)]
    pub classical: i64,
}

impl Ratings {
    pub fn get(&self, mode: GameMode) -> i64 {
        match mode {
            GameMode::Bullet => self.bullet,
            GameMode::Blitz => self.blitz,
            GameMode::Rapid => self.rapid,
            GameMode::Classical => self.classical,
        }
    }
}

/// Aggregate statistics for every mode
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ModeStatsSet {
    #[serde(default)]
    pub bullet: ModeStats,
    #[serde(default)]
    pub blitz: ModeStats,
    #[serde(default)]
    pub rapid: ModeStats,
    #[serde(default)]
    pub classical: ModeStats,
}

impl ModeStatsSet {
    pub fn get(&self, mode: GameMode) -> &ModeStats {
        match mode {
            GameMode::Bullet => &self.bullet,
            GameMode::Blitz => &self.blitz,
            GameMode::Rapid => &self.rapid,
            GameMode::Classical => &self.classical,
        }
    }
}

/// Aggregate win/draw/loss statistics for one game mode
///
/// `draws` defaults to 0 when the API omits it. Losses are derived, never
/// served.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ModeStats {
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub draws: i64,
    #[serde(default)]
    pub win_percentage: f64,
    #[serde(default)]
    pub white_win_percentage: f64,
    #[serde(default)]
    pub black_win_percentage: f64,
}

impl ModeStats {
    /// Derived losses: games played minus wins and draws
    pub fn losses(&self) -> i64 {
        self.games_played - self.wins - self.draws
    }

    /// Derived loss percentage over games played, 0 when no games
    pub fn loss_percentage(&self) -> f64 {
        if self.games_played > 0 {
            self.losses() as f64 * 100.0 / self.games_played as f64
        } else {
            0.0
        }
    }
}

/// DigiQuiz correct/incorrect counters, tracked separately from game ratings
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DigiQuizStats {
    #[serde(default)]
    pub correct: i64,
    #[serde(default)]
    pub wrong: i64,
}

/// A social link on a profile
///
/// The label may be empty; display code infers the platform from the URL.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct SocialLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

/// A friend-list entry
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct FriendUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub online: bool,
}

/// A pending friend request
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct FriendRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender: FriendUser,
    #[serde(default)]
    pub recipient: FriendUser,
}

/// One finished game for the history panel
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct GameSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub opponent: String,
    /// "win", "loss" or "draw" from the profile owner's side
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub played_at: i64,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        viewer: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losses_derived() {
        let stats = ModeStats {
            games_played: 10,
            wins: 7,
            draws: 1,
            ..Default::default()
        };
        assert_eq!(stats.losses(), 2);
        assert_eq!(stats.loss_percentage(), 20.0);
    }

    #[test]
    fn test_loss_percentage_no_games() {
        let stats = ModeStats::default();
        assert_eq!(stats.losses(), 0);
        assert_eq!(stats.loss_percentage(), 0.0);
    }

    #[test]
    fn test_draws_default_when_absent() {
        let stats: ModeStats =
            serde_json::from_str(r#"{"games_played": 5, "wins": 3}"#).unwrap();
        assert_eq!(stats.draws, 0);
        assert_eq!(stats.losses(), 2);
    }

    #[test]
    fn test_profile_defensive_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username": "magnus"}"#).unwrap();
        assert_eq!(profile.username, "magnus");
        assert!(profile.name.is_none());
        assert!(profile.social_links.is_empty());
        assert_eq!(profile.stats.get(GameMode::Blitz).games_played, 0);
    }
}
