use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/history")]
    History,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::History.to_path(), "/history");
        assert_eq!(Route::recognize("/history"), Some(Route::History));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
