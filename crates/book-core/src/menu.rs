use crate::timer::PhaseTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Work,
    Projects,
    Socials,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Work,
        Route::Projects,
        Route::Socials,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Work => "Work",
            Route::Projects => "Projects",
            Route::Socials => "Socials",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Work => "/work",
            Route::Projects => "/projects",
            Route::Socials => "/socials",
        }
    }

    /// About plays the book animation before navigating.
    pub fn wants_book_open(self) -> bool {
        matches!(self, Route::About)
    }
}

/// Result of picking a menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Navigate(Route),
    Deferred(Route),
}

pub struct SideMenu {
    open: bool,
    pending: Option<Route>,
    nav_timer: PhaseTimer,
    nav_delay_sec: f64,
}

impl SideMenu {
    pub fn new(nav_delay_sec: f64) -> Self {
        Self {
            open: false,
            pending: None,
            nav_timer: PhaseTimer::default(),
            nav_delay_sec,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn pending(&self) -> Option<Route> {
        self.pending
    }

    /// Close the menu and navigate, immediately or after the About delay.
    /// A new selection replaces whatever was still pending.
    pub fn select(&mut self, route: Route, now: f64) -> Selection {
        self.open = false;
        self.cancel_pending();
        if route.wants_book_open() {
            self.pending = Some(route);
            self.nav_timer.arm(now);
            log::debug!("[menu] {} deferred {:.1}s", route.label(), self.nav_delay_sec);
            Selection::Deferred(route)
        } else {
            Selection::Navigate(route)
        }
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
        self.nav_timer.cancel();
    }

    /// Deferred navigation that is due at `now`, if any.
    pub fn poll(&mut self, now: f64) -> Option<Route> {
        if self.nav_timer.has_elapsed(now, self.nav_delay_sec) {
            self.nav_timer.cancel();
            return self.pending.take();
        }
        None
    }
}
