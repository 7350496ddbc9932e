//! Two-view navigation: catalog and cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blueberry_events::Event;

/// Top-level views. The location alone decides which one renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Catalog,
    Cart,
}

impl View {
    pub const ALL: [View; 2] = [View::Catalog, View::Cart];

    pub fn location(self) -> &'static str {
        match self {
            View::Catalog => "/",
            View::Cart => "/cart",
        }
    }

    /// The view at `location`, if it is one of the two known routes.
    pub fn from_location(location: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.location() == location)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Catalog => "catalog",
            View::Cart => "cart",
        }
    }
}

impl core::fmt::Display for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event: Navigated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigated {
    pub from: View,
    pub to: View,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Navigated(Navigated),
}

impl Event for NavigationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            NavigationEvent::Navigated(_) => "navigation.navigated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            NavigationEvent::Navigated(e) => e.occurred_at,
        }
    }
}

/// Two-state machine over [`View`]. Starts at the catalog, no terminal state,
/// and every transition is allowed from every state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn location(&self) -> &'static str {
        self.current.location()
    }

    pub fn go_to(&mut self, to: View, occurred_at: DateTime<Utc>) -> NavigationEvent {
        let from = core::mem::replace(&mut self.current, to);
        tracing::debug!(%from, %to, "navigated");
        NavigationEvent::Navigated(Navigated {
            from,
            to,
            occurred_at,
        })
    }

    /// Enter `location` directly. Unknown locations leave the state unchanged.
    pub fn visit(&mut self, location: &str, occurred_at: DateTime<Utc>) -> Option<NavigationEvent> {
        View::from_location(location).map(|view| self.go_to(view, occurred_at))
    }
}
