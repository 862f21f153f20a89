use crate::cart::Cart;
use crate::catalog;
use crate::checkout;
use crate::config::Config;
use crate::models::Product;
use crate::rates::{self, ExchangeRate, RateClient};
use crate::render;
use crate::storage;
use crate::view;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use std::io::{self, Write};
use std::path::Path;

/// Everything the storefront knows at runtime. Owned by the controller
/// and handed by reference to the view and checkout layers; nothing reads
/// it from ambient scope.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Vec<Product>,
    pub visible: Vec<Product>,
    pub cart: Cart,
    pub rate: Option<ExchangeRate>,
}

/// The controller. Every mutation is followed by an explicit render call,
/// so the update-then-draw pass is visible here instead of hiding inside
/// the mutators.
pub struct Storefront {
    state: AppState,
    pool: SqlitePool,
    rates: RateClient,
    config: Config,
    page: String,
}

impl Storefront {
    pub async fn new(config: Config, page: String) -> Result<Self> {
        let pool = storage::create_db_pool(&config.database_url).await?;
        let rates = RateClient::new(config.rate_endpoint.clone());
        Ok(Self {
            state: AppState::default(),
            pool,
            rates,
            config,
            page,
        })
    }

    /// One full refresh cycle: rate → page category → catalog → product
    /// render → cart restore → cart render. A failed rate fetch renders
    /// the error marker and skips the rest of the cycle; a failed catalog
    /// load keeps whatever state was loaded before. The awaits run in
    /// order, so a slow response can never clobber a newer one.
    pub async fn refresh_cycle(&mut self) -> Result<()> {
        let mut out = io::stdout();

        match self.rates.get_usd_mxn().await {
            Ok(rate) => self.state.rate = Some(rate),
            Err(e) => {
                eprintln!("Error al obtener la tasa de cambio: {}", e);
                render::draw_rate(&mut out, "Error")?;
                return Ok(());
            }
        }

        let category = catalog::page_category(&self.page);
        match catalog::load_catalog(Path::new(&self.config.catalog_path), category.as_deref()) {
            Ok((visible, all)) => {
                self.state.visible = visible;
                self.state.catalog = all;
            }
            Err(e) => eprintln!("Error al cargar los productos: {}", e),
        }

        self.render_products(&mut out)?;

        self.state.cart = storage::load_cart(&self.pool).await?;
        self.render_cart(&mut out)?;

        Ok(())
    }

    /// Refresh on the fixed interval, indefinitely. The first tick fires
    /// immediately, so this covers the startup cycle too. A failed cycle
    /// is logged and the session keeps ticking.
    pub async fn watch(&mut self) -> Result<()> {
        let mut interval = tokio::time::interval(rates::REFRESH_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = self.refresh_cycle().await {
                eprintln!("Error en el ciclo de actualización: {}", e);
            }
        }
    }

    /// Load rate, catalog and persisted cart without drawing the product
    /// grid. One-shot cart commands start from here; a rate failure only
    /// costs the MXN conversion, but without a catalog there is nothing
    /// to look ids up in, so that one propagates.
    pub async fn prepare(&mut self) -> Result<()> {
        match self.rates.get_usd_mxn().await {
            Ok(rate) => self.state.rate = Some(rate),
            Err(e) => eprintln!("Error al obtener la tasa de cambio: {}", e),
        }

        let category = catalog::page_category(&self.page);
        let (visible, all) =
            catalog::load_catalog(Path::new(&self.config.catalog_path), category.as_deref())?;
        self.state.visible = visible;
        self.state.catalog = all;

        self.state.cart = storage::load_cart(&self.pool).await?;
        Ok(())
    }

    /// Add one unit of a catalog product, persist, redraw the cart and
    /// confirm with a toast.
    pub async fn add_to_cart(&mut self, id: u32) -> Result<()> {
        if !self.state.catalog.iter().any(|product| product.id == id) {
            anyhow::bail!("El producto {} no existe en el catálogo", id);
        }

        self.state.cart.add(id);
        storage::save_cart(&self.pool, &self.state.cart).await?;

        let mut out = io::stdout();
        self.render_cart(&mut out)?;
        render::toast(&mut out, "Producto añadido al carrito")?;
        Ok(())
    }

    /// Clear the cart, persist, redraw and confirm with a toast. Refused
    /// with a notification while the cart is EMPTY, same as checkout.
    pub async fn empty_cart(&mut self) -> Result<()> {
        let mut out = io::stdout();

        if self.state.cart.is_empty() {
            render::toast(&mut out, "Tu carrito está vacío.")?;
            return Ok(());
        }

        self.state.cart.empty();
        storage::save_cart(&self.pool, &self.state.cart).await?;

        self.render_cart(&mut out)?;
        render::toast(&mut out, "El carrito ha sido vaciado.")?;
        Ok(())
    }

    /// Print the saved cart.
    pub fn show_cart(&self) -> Result<()> {
        self.render_cart(&mut io::stdout())
    }

    /// Hand the cart off to WhatsApp: print the composed message and the
    /// deep link. Refused with a notification while the cart is EMPTY.
    pub fn handoff_checkout(&self) -> Result<()> {
        let mut out = io::stdout();
        let view = view::cart_view(&self.state.cart, &self.state.catalog, self.rate_value());

        if !view.checkout_enabled {
            render::toast(&mut out, "Tu carrito está vacío.")?;
            return Ok(());
        }

        let message = checkout::message(&view);
        let url = checkout::url(&self.config.whatsapp_number, &message);
        render::draw_checkout(&mut out, &message, &url)
    }

    fn rate_value(&self) -> f64 {
        self.state.rate.map(|rate| rate.value).unwrap_or(0.0)
    }

    fn render_products(&self, out: &mut impl Write) -> Result<()> {
        let heading = match catalog::page_category(&self.page) {
            Some(category) => catalog::category_title(&category),
            None => "Productos".to_string(),
        };
        let rate_display = match self.state.rate {
            Some(rate) => format!(
                "{:.2} (actualizado {})",
                rate.value,
                rate.fetched_at.format("%H:%M:%S")
            ),
            None => "Error".to_string(),
        };
        let cards = view::product_cards(&self.state.visible, self.rate_value());
        render::draw_products(out, &heading, &rate_display, &cards)
    }

    fn render_cart(&self, out: &mut impl Write) -> Result<()> {
        let view = view::cart_view(&self.state.cart, &self.state.catalog, self.rate_value());
        render::draw_cart(out, &view)
    }
}
