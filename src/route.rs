/// In-app navigation between views
use crate::api::ScrapeResult;

/// A view plus the data it was opened with
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    /// `None` when the results page is opened without a payload
    Results(Option<ScrapeResult>),
    UserDetails(String),
    Trending,
}

impl View {
    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::Results(_) => "/results".to_string(),
            View::UserDetails(username) => format!("/user-details/{}", username),
            View::Trending => "/trending".to_string(),
        }
    }

    /// View for a location path; unknown paths land on the home view
    pub fn from_path(path: &str) -> View {
        let trimmed = path.trim_end_matches('/');

        if trimmed == "/results" {
            View::Results(None)
        } else if trimmed == "/trending" {
            View::Trending
        } else if let Some(username) = trimmed
            .strip_prefix("/user-details/")
            .filter(|name| !name.is_empty() && !name.contains('/'))
        {
            View::UserDetails(username.to_string())
        } else {
            View::Home
        }
    }
}

/// History stack; the bottom entry is never popped
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<View>,
}

impl Navigator {
    pub fn new(start: View) -> Self {
        Navigator { stack: vec![start] }
    }

    pub fn current(&self) -> &View {
        // stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, view: View) {
        log::debug!("navigate to {}", view.path());
        self.stack.push(view);
    }

    /// Returns false when already at the first view
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn reset(&mut self) {
        self.stack.truncate(1);
        self.stack[0] = View::Home;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(View::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path(""), View::Home);
        assert_eq!(View::from_path("/results"), View::Results(None));
        assert_eq!(View::from_path("/results/"), View::Results(None));
        assert_eq!(View::from_path("/trending"), View::Trending);
        assert_eq!(
            View::from_path("/user-details/ferris"),
            View::UserDetails("ferris".to_string())
        );
        assert_eq!(View::from_path("/user-details/"), View::Home);
        assert_eq!(View::from_path("/user-details/a/b"), View::Home);
        assert_eq!(View::from_path("/nowhere"), View::Home);
    }

    #[test]
    fn test_path_round_trip_for_payload_free_views() {
        for view in [View::Home, View::Trending, View::UserDetails("crab".to_string())] {
            assert_eq!(View::from_path(&view.path()), view);
        }
    }

    #[test]
    fn test_navigator_push_and_back() {
        let mut nav = Navigator::default();
        assert!(!nav.can_go_back());

        nav.push(View::Results(None));
        nav.push(View::UserDetails("ferris".to_string()));
        assert_eq!(nav.current(), &View::UserDetails("ferris".to_string()));

        assert!(nav.back());
        assert_eq!(nav.current(), &View::Results(None));
        assert!(nav.back());
        assert_eq!(nav.current(), &View::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), &View::Home);
    }

    #[test]
    fn test_navigator_reset() {
        let mut nav = Navigator::new(View::Trending);
        nav.push(View::Results(None));

        nav.reset();

        assert_eq!(nav.current(), &View::Home);
        assert!(!nav.can_go_back());
    }
}
