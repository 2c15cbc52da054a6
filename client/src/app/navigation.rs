//! # Navigation Stack
//!
//! Stack of screen entries. Screens below the top stay mounted (their state
//! survives) until they are popped.

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Search,
    Cart,
    Login,
    Signup,
    Profile,
    Config,
    History,
    Cupon,
    Payment,
}

impl Route {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Cupcakes",
            Route::Search => "Search",
            Route::Cart => "Cart",
            Route::Login => "Login",
            Route::Signup => "Sign up",
            Route::Profile => "Profile",
            Route::Config => "Settings",
            Route::History => "Order history",
            Route::Cupon => "Coupons",
            Route::Payment => "Payment methods",
        }
    }
}

/// Parameters carried by a stack entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Home scrolls to this cupcake once the catalog is loaded.
    pub focus_cupcake_id: Option<i64>,
}

impl RouteParams {
    pub fn focus(cupcake_id: i64) -> Self {
        Self { focus_cupcake_id: Some(cupcake_id) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub route: Route,
    pub params: RouteParams,
}

/// What a navigation operation did to the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Newly mounted routes; each needs its initial load.
    pub mounted: Vec<Route>,
    /// Popped routes, top first; their state must be reset.
    pub unmounted: Vec<Route>,
    /// The target was already mounted and received different params.
    pub params_changed: bool,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty() && !self.params_changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<NavEntry>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at Home. Home counts as mounted from the start; callers load it.
    pub fn new() -> Self {
        Self { stack: vec![NavEntry { route: Route::Home, params: RouteParams::default() }] }
    }

    pub fn current(&self) -> NavEntry {
        // The stack is never empty: `back` keeps the root entry.
        self.stack
            .last()
            .copied()
            .unwrap_or(NavEntry { route: Route::Home, params: RouteParams::default() })
    }

    pub fn is_mounted(&self, route: Route) -> bool {
        self.stack.iter().any(|entry| entry.route == route)
    }

    pub fn params(&self, route: Route) -> Option<RouteParams> {
        self.stack.iter().find(|entry| entry.route == route).map(|entry| entry.params)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Go to `route`: pop back to its existing entry, or push a new one.
    pub fn navigate(&mut self, route: Route, params: RouteParams) -> Transition {
        let mut transition = Transition::default();
        match self.stack.iter().position(|entry| entry.route == route) {
            Some(index) => {
                transition.unmounted = self.pop_above(index);
                let entry = &mut self.stack[index];
                transition.params_changed = entry.params != params;
                entry.params = params;
            }
            None => {
                self.stack.push(NavEntry { route, params });
                transition.mounted.push(route);
            }
        }
        transition
    }

    /// Swap the top entry for `route`.
    pub fn replace(&mut self, route: Route, params: RouteParams) -> Transition {
        if self.stack.len() == 1 {
            let top = self.current();
            if top.route == route {
                return self.navigate(route, params);
            }
            self.stack.clear();
            self.stack.push(NavEntry { route, params });
            return Transition { mounted: vec![route], unmounted: vec![top.route], params_changed: false };
        }

        let mut unmounted = Vec::new();
        if let Some(top) = self.stack.pop() {
            unmounted.push(top.route);
        }
        let mut transition = self.navigate(route, params);
        unmounted.append(&mut transition.unmounted);
        transition.unmounted = unmounted;
        // A route that was only just popped is mounted afresh.
        if transition.unmounted.contains(&route) && !transition.mounted.contains(&route) {
            transition.mounted.push(route);
        }
        transition
    }

    /// Pop the top entry. The root entry is never popped.
    pub fn back(&mut self) -> Transition {
        if self.stack.len() <= 1 {
            return Transition::default();
        }
        let unmounted = self.pop_above(self.stack.len() - 2);
        Transition { unmounted, ..Transition::default() }
    }

    fn pop_above(&mut self, index: usize) -> Vec<Route> {
        let mut popped = Vec::new();
        while self.stack.len() > index + 1 {
            if let Some(entry) = self.stack.pop() {
                popped.push(entry.route);
            }
        }
        popped
    }
}
