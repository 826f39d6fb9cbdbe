//! # Navigation
//!
//! The screens' router, seen from the flows as an opaque collaborator.
//!
//! ## Screen Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SignIn ◄──► SignUp                                                     │
//! │    │            │                                                       │
//! │    └────┬───────┘ push(Home)                                            │
//! │         ▼                                                               │
//! │       Home ──► Category ──► DishDetails ──► Cart ──► Payment ──► Reviews│
//! │         ▲          │             ▲                                  │   │
//! │         │          └─────────────┘                                  │   │
//! │         └──────────────────── push(Home) ◄──────────────────────────┘   │
//! │                                                                         │
//! │  Profile ── replace(SignIn) on sign-out                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    SignIn,
    SignUp,
    Home,
    #[serde(rename_all = "camelCase")]
    Category { category_id: i64 },
    #[serde(rename_all = "camelCase")]
    DishDetails { dish_id: i64 },
    Cart,
    Saved,
    Profile,
    Payment,
    Reviews,
}

impl Route {
    /// The screen path the mobile router understands.
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/(auth)/sign-in",
            Route::SignUp => "/(auth)/sign-up",
            Route::Home => "/(tabs)/home",
            Route::Category { .. } => "/category",
            Route::DishDetails { .. } => "/dish-details",
            Route::Cart => "/cart",
            Route::Saved => "/(tabs)/saved",
            Route::Profile => "/(tabs)/profile",
            Route::Payment => "/payment",
            Route::Reviews => "/reviews",
        }
    }
}

/// Where the flows send the user next.
pub trait Router {
    fn push(&mut self, route: Route);
    fn replace(&mut self, route: Route);
    fn back(&mut self);
}

// =============================================================================
// Recording Router
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Push(Route),
    Replace(Route),
    Back,
}

/// Keeps a history stack and a log of every call. Used headless and in tests.
#[derive(Debug, Clone)]
pub struct RecordingRouter {
    stack: Vec<Route>,
    log: Vec<Navigation>,
}

impl RecordingRouter {
    /// Starts on `initial` with an empty log.
    pub fn new(initial: Route) -> Self {
        RecordingRouter {
            stack: vec![initial],
            log: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<Route> {
        self.stack.last().copied()
    }

    pub fn log(&self) -> &[Navigation] {
        &self.log
    }

    pub fn last(&self) -> Option<Navigation> {
        self.log.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for RecordingRouter {
    fn default() -> Self {
        RecordingRouter::new(Route::SignIn)
    }
}

impl Router for RecordingRouter {
    fn push(&mut self, route: Route) {
        self.stack.push(route);
        self.log.push(Navigation::Push(route));
    }

    fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
        self.log.push(Navigation::Replace(route));
    }

    fn back(&mut self) {
        // The root screen stays put
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.log.push(Navigation::Back);
    }
}
