//! Routing and the chrome shared by every page.

use std::fmt;

use crate::render::Palette;

/// Pages reachable through the hash router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    HectareCalculator,
    PayPalCalculator,
}

impl Route {
    pub const ALL: [Route; 3] = [
        Route::Home,
        Route::HectareCalculator,
        Route::PayPalCalculator,
    ];

    /// Resolve a location fragment such as `#/tools/paypal-calculator`.
    ///
    /// The leading `#` is optional and a trailing `/` is ignored. Unknown
    /// paths resolve to nothing.
    pub fn parse(fragment: &str) -> Option<Route> {
        let path = fragment.trim().strip_prefix('#').unwrap_or(fragment.trim());
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::HectareCalculator => "/tools/hectare-calculator",
            Route::PayPalCalculator => "/tools/paypal-calculator",
        }
    }

    /// Link target for the hash router.
    pub fn href(self) -> String {
        format!("#{}", self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_TITLE: &str = "Tu caja de herramientas digital";
pub const HERO_SUBTITLE: &str =
    "Una colección de utilidades diseñadas para simplificar tus tareas diarias.";

pub const TOOLS: [Tool; 2] = [
    Tool {
        route: Route::HectareCalculator,
        title: "Calculadora Visual de Hectáreas",
        description: "Visualiza y mide terrenos. Ingresa hectáreas y ajusta la forma del polígono de forma interactiva.",
    },
    Tool {
        route: Route::PayPalCalculator,
        title: "Calculadora de Comisiones PayPal",
        description: "Calcula cuánto necesitas enviar para que llegue una cantidad exacta, o cuánto recibirás.",
    },
];

/// Header brand text, linking home
pub const BRAND: &str = "Herramientas Web y Más";

/// A header navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
}

impl NavEntry {
    /// Exact match only, so "Inicio" is not lit up on every tool page.
    pub fn is_active(&self, current: Option<Route>) -> bool {
        current == Some(self.route)
    }
}

pub const NAV: [NavEntry; 1] = [NavEntry {
    label: "Inicio",
    route: Route::Home,
}];

/// The two footer lines for a given year.
pub fn footer_lines(year: i32) -> [String; 2] {
    [
        format!("© {year} Herramientas Web, Finanzas y Más. Todos los derechos reservados."),
        "Creado con ❤️ y código.".to_string(),
    ]
}

/// Name of the root element attribute carrying the theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of [`THEME_ATTRIBUTE`].
    pub fn attribute_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}
