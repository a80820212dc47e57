/**
 * Shared Types Module
 *
 * Defines the view enum the central panel switches on. The wire types the
 * client exchanges with the backend all live in `shared::models`.
 */

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Today's top projects with the forum sidebar
    Home,
    /// Period-filtered rankings with the calendar browser
    Leaderboard,
    /// The project submission form
    Submit,
    /// Submission review queue (ADMIN only)
    Admin,
    /// Current user card and activity stats
    Profile,
    /// Thread list and open thread
    Forum,
    /// Sign-in instructions and token entry
    Auth,
}

impl AppView {
    /// Label shown on the navigation button
    pub fn title(&self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Leaderboard => "Leaderboard",
            AppView::Submit => "Submit",
            AppView::Admin => "Admin",
            AppView::Profile => "Profile",
            AppView::Forum => "Forum",
            AppView::Auth => "Sign in",
        }
    }
}

impl Default for AppView {
    fn default() -> Self {
        AppView::Home
    }
}
