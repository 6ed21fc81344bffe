use book_core::Route;

/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleOpen,
    /// Close the side menu if it is open, otherwise close the book.
    Dismiss,
    ToggleMenu,
    SelectRoute(Route),
    StopSpin,
}

#[inline]
pub fn route_for_digit(key: &str) -> Option<Route> {
    match key {
        "1" => Some(Route::Home),
        "2" => Some(Route::About),
        "3" => Some(Route::Work),
        "4" => Some(Route::Projects),
        "5" => Some(Route::Socials),
        _ => None,
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(route) = route_for_digit(key) {
        return Some(KeyAction::SelectRoute(route));
    }
    match key {
        "o" | "O" | "Enter" => Some(KeyAction::ToggleOpen),
        "Escape" => Some(KeyAction::Dismiss),
        "m" | "M" => Some(KeyAction::ToggleMenu),
        " " | "Spacebar" => Some(KeyAction::StopSpin),
        _ => None,
    }
}
