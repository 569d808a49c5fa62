//! Screen history of the rider app.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Screen {
    PassengerHome,
    BusDetails {
        bus_id: String,
    },
    RouteTracking {
        route_id: String,
    },
    NearYou,
    Results {
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bus_number: Option<String>,
    },
    AdminMonitor,
}

/// Stack of visited screens. The bottom entry is always the passenger home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavStack {
    stack: Vec<Screen>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Screen::PassengerHome],
        }
    }
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Screen {
        // never empty, pop keeps the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Leaves the current screen. Returns `None` on the root, which stays.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Drops everything above the root.
    pub fn home(&mut self) {
        self.stack.truncate(1);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
