//! The closed route table.
//!
//! Every admin view is a variant here; hash names are the wire format the
//! browser bar shows. Unknown names parse to `None` and the router
//! self-corrects to the dashboard.

/// An admin panel route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Products,
    NewProduct,
    Orders,
    Promotions,
    NewPromotion,
    Banners,
    NewBanner,
    Clients,
    NewClient,
    Settings,
}

impl Route {
    /// Where the router lands when a hash does not resolve.
    pub const DEFAULT: Self = Self::Dashboard;

    /// Every route, in sidebar order.
    pub const ALL: [Self; 11] = [
        Self::Dashboard,
        Self::Products,
        Self::NewProduct,
        Self::Orders,
        Self::Promotions,
        Self::NewPromotion,
        Self::Banners,
        Self::NewBanner,
        Self::Clients,
        Self::NewClient,
        Self::Settings,
    ];

    /// Resolve a hash name. Submenu listing aliases (`listar-*`) map to
    /// their listing view.
    #[must_use]
    pub fn parse(hash: &str) -> Option<Self> {
        match hash.trim_start_matches('#') {
            "dashboard" => Some(Self::Dashboard),
            "productos" | "listar-productos" => Some(Self::Products),
            "nuevo-producto" => Some(Self::NewProduct),
            "pedidos" => Some(Self::Orders),
            "promociones" | "listar-promociones" => Some(Self::Promotions),
            "nueva-promocion" => Some(Self::NewPromotion),
            "banners" | "listar-banners" => Some(Self::Banners),
            "nuevo-banner" => Some(Self::NewBanner),
            "clientes" => Some(Self::Clients),
            "nuevo-cliente" => Some(Self::NewClient),
            "configuracion" => Some(Self::Settings),
            _ => None,
        }
    }

    /// The canonical hash name for this route.
    #[must_use]
    pub const fn hash(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "productos",
            Self::NewProduct => "nuevo-producto",
            Self::Orders => "pedidos",
            Self::Promotions => "promociones",
            Self::NewPromotion => "nueva-promocion",
            Self::Banners => "banners",
            Self::NewBanner => "nuevo-banner",
            Self::Clients => "clientes",
            Self::NewClient => "nuevo-cliente",
            Self::Settings => "configuracion",
        }
    }

    /// Display title, also used for the window title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Productos",
            Self::NewProduct => "Nuevo Producto",
            Self::Orders => "Pedidos",
            Self::Promotions => "Promociones",
            Self::NewPromotion => "Nueva Promoción",
            Self::Banners => "Banners",
            Self::NewBanner => "Nuevo Banner",
            Self::Clients => "Clientes",
            Self::NewClient => "Nuevo Cliente",
            Self::Settings => "Configuración",
        }
    }

    /// The sidebar section a submenu leaf belongs to, if any.
    ///
    /// Used to mark the ancestor menu entry active when a form route is
    /// current.
    #[must_use]
    pub const fn menu_parent(self) -> Option<Self> {
        match self {
            Self::NewProduct => Some(Self::Products),
            Self::NewPromotion => Some(Self::Promotions),
            Self::NewBanner => Some(Self::Banners),
            Self::NewClient => Some(Self::Clients),
            _ => None,
        }
    }

    /// The sidebar entry to highlight for this route.
    #[must_use]
    pub const fn menu_section(self) -> Self {
        match self.menu_parent() {
            Some(parent) => parent,
            None => self,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash())
    }
}
