//! # Application State Types
//!
//! All state for the client: screens, the explicit session object, and the
//! per-screen view state (dashboard, orders, test requests). Background
//! tasks mutate this behind a `parking_lot::RwLock`; every list fetch
//! carries a generation number so a stale response can never overwrite a
//! newer one.

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::storage::{keys, SessionStore};
use chrono::{DateTime, Duration, Utc};
use shared::domain::access;
use shared::domain::risk::{Reading, RiskCategory};
use shared::domain::workflow::OrderStatus;
use shared::dto::auth::ApiUser;
use shared::dto::batch::Batch;
use shared::dto::order::{Order, OrderFilters, OrderStatistic};
use std::sync::Arc;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login form
    Login,
    /// Account registration form
    Register,
    /// Test results overview with batch detail and marketplace listing
    Dashboard,
    /// New test request form
    NewTest,
    /// Seller order management
    Orders,
    /// User profile and sign-out
    Profile,
}

impl Screen {
    /// All screens in tab order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Login,
            Screen::Register,
            Screen::Dashboard,
            Screen::NewTest,
            Screen::Orders,
            Screen::Profile,
        ]
    }

    /// Screen title for header display.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Welcome Back",
            Screen::Register => "Create Account",
            Screen::Dashboard => "Dashboard",
            Screen::NewTest => "New Test Request",
            Screen::Orders => "Order Management",
            Screen::Profile => "Profile",
        }
    }

    /// Whether a screen requires an authenticated session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Register)
    }
}

/// UI language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Kinyarwanda,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kinyarwanda => "rw",
        }
    }

    pub fn from_code(code: &str) -> Language {
        match code {
            "rw" => Language::Kinyarwanda,
            _ => Language::English,
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Kinyarwanda,
            Language::Kinyarwanda => Language::English,
        }
    }
}

/// An authenticated session: the current user, their token, and when the
/// token lapses. Passed explicitly to whatever needs it; there is no
/// ambient global user.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: ApiUser,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Tokens are valid for one hour from login.
    pub const TOKEN_TTL_HOURS: i64 = 1;

    pub fn new(user: ApiUser, token: String, now: DateTime<Utc>) -> Self {
        Session {
            user,
            token,
            expires_at: now + Duration::hours(Self::TOKEN_TTL_HOURS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Restore a session from the store. Returns `None` when nothing is
    /// persisted or the token has lapsed.
    pub fn load(store: &SessionStore, now: DateTime<Utc>) -> Result<Option<Session>> {
        let (Some(user_json), Some(token)) = (store.get(keys::USER), store.get(keys::TOKEN))
        else {
            return Ok(None);
        };
        let user: ApiUser = serde_json::from_str(user_json)?;
        let expires_at = store
            .get(keys::TOKEN_EXPIRY)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|millis| DateTime::from_timestamp_millis(millis))
            .unwrap_or(now);
        let session = Session {
            user,
            token: token.to_string(),
            expires_at,
        };
        if session.is_expired(now) {
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Persist this session wholesale. `remembered_email` controls the
    /// remember-me keys: `Some` stores the email, `None` clears both.
    pub fn persist(&self, store: &mut SessionStore, remembered_email: Option<&str>) -> Result<()> {
        store.set(keys::USER, serde_json::to_string(&self.user)?)?;
        store.set(keys::TOKEN, self.token.clone())?;
        store.set(keys::IS_AUTHENTICATED, "true")?;
        store.set(keys::TOKEN_EXPIRY, self.expires_at.timestamp_millis().to_string())?;
        match remembered_email {
            Some(email) => {
                store.set(keys::REMEMBER_ME, "true")?;
                store.set(keys::REMEMBERED_EMAIL, email)?;
            }
            None => {
                store.remove(keys::REMEMBER_ME)?;
                store.remove(keys::REMEMBERED_EMAIL)?;
            }
        }
        Ok(())
    }
}

/// A batch row as the dashboard presents it: reading coerced, category
/// classified, marketplace flags surfaced.
#[derive(Debug, Clone)]
pub struct TestSummary {
    pub id: String,
    pub batch_id: String,
    pub supplier: String,
    pub date: String,
    pub reading: Reading,
    pub category: RiskCategory,
    pub created_at: String,
    pub is_on_market: bool,
    pub available_quantity: f64,
    pub price_per_kg: f64,
}

impl TestSummary {
    pub fn from_batch(batch: &Batch) -> TestSummary {
        let reading = batch.reading();
        TestSummary {
            id: batch.id.clone(),
            batch_id: batch.batch_id.clone(),
            supplier: batch.supplier.clone(),
            date: batch.date.clone(),
            reading,
            category: reading.classify(),
            created_at: batch.created_at.clone(),
            is_on_market: batch.is_on_market,
            available_quantity: batch.available_quantity.unwrap_or(0.0),
            price_per_kg: batch.price_per_kg.unwrap_or(0.0),
        }
    }
}

/// Aggregates for the dashboard stat cards, computed from the fetched
/// batches. (The legacy client decorated these with random trend
/// percentages; those were cosmetic and are not reproduced.)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_tests: usize,
    pub safe_for_children: usize,
    /// Everything above the child-safe tier, including unsafe batches.
    pub alerts: usize,
    pub avg_ppb: f64,
}

impl DashboardStats {
    pub fn compute(batches: &[Batch]) -> DashboardStats {
        let total_tests = batches.len();
        let mut safe_for_children = 0;
        let mut alerts = 0;
        let mut sum_ppb = 0.0;
        for batch in batches {
            let reading = batch.reading();
            sum_ppb += reading.ppb();
            let category = reading.classify();
            if category.is_warning() || category.is_alert() {
                alerts += 1;
            } else {
                safe_for_children += 1;
            }
        }
        let avg_ppb = if total_tests > 0 {
            sum_ppb / total_tests as f64
        } else {
            0.0
        };
        DashboardStats {
            total_tests,
            safe_for_children,
            alerts,
            avg_ppb,
        }
    }
}

/// Restrict a fetched batch list to what the user may see: admins see
/// everything, everyone else only batches they own. Records without an id
/// are dropped.
pub fn visible_batches(user: &ApiUser, batches: Vec<Batch>) -> Vec<Batch> {
    batches
        .into_iter()
        .filter(|batch| !batch.id.is_empty())
        .filter(|batch| access::can_view_all_batches(user) || access::is_owner(batch, user))
        .collect()
}

/// Marketplace listing form (string-typed fields, validated on submit).
#[derive(Debug, Clone, Default)]
pub struct MarketplaceForm {
    pub quantity: String,
    pub price_per_kg: String,
}

/// Status update form for the orders screen.
#[derive(Debug, Clone, Default)]
pub struct StatusUpdateForm {
    pub status: Option<OrderStatus>,
    pub seller_notes: String,
    pub tracking_number: String,
    pub estimated_delivery: String,
}

impl StatusUpdateForm {
    /// Prefill from an order when the operator picks a target status.
    pub fn for_order(order: &Order, status: OrderStatus) -> StatusUpdateForm {
        StatusUpdateForm {
            status: Some(status),
            seller_notes: order.seller_notes.clone().unwrap_or_default(),
            tracking_number: order.tracking_number.clone().unwrap_or_default(),
            estimated_delivery: order.estimated_delivery.clone().unwrap_or_default(),
        }
    }
}

/// Dashboard screen state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub batches: Vec<Batch>,
    pub recent_tests: Vec<TestSummary>,
    pub stats: DashboardStats,
    pub loading: bool,
    /// In-flight guard: no second batch fetch while one is pending.
    pub fetch_in_flight: bool,
    /// Bumped per fetch; responses carrying an older value are discarded.
    pub fetch_generation: u64,
    pub error: Option<String>,
    pub selected_batch_id: Option<String>,
    pub marketplace_form: MarketplaceForm,
    /// In-flight guard for marketplace list/remove submissions.
    pub submitting: bool,
}

impl DashboardState {
    /// Number of rows the recent-tests list shows.
    pub const RECENT_TESTS_LIMIT: usize = 10;

    /// Replace the batch list wholesale (last successful response wins)
    /// and recompute the derived views.
    pub fn apply_batches(&mut self, user: &ApiUser, batches: Vec<Batch>) {
        let batches = visible_batches(user, batches);
        self.stats = DashboardStats::compute(&batches);
        let mut recent: Vec<TestSummary> = batches.iter().map(TestSummary::from_batch).collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(Self::RECENT_TESTS_LIMIT);
        self.recent_tests = recent;
        self.batches = batches;
        self.error = None;
    }

    pub fn selected_batch(&self) -> Option<&Batch> {
        let id = self.selected_batch_id.as_deref()?;
        self.batches.iter().find(|batch| batch.id == id)
    }

    /// Swap in an updated batch returned by a marketplace call.
    pub fn replace_batch(&mut self, updated: Batch) {
        if let Some(slot) = self.batches.iter_mut().find(|b| b.id == updated.id) {
            *slot = updated;
        }
        self.stats = DashboardStats::compute(&self.batches);
    }
}

/// New test request form state.
#[derive(Debug, Clone, Default)]
pub struct NewTestState {
    pub laboratories: Vec<ApiUser>,
    pub batch_id: String,
    pub supplier: String,
    pub date: String,
    pub laboratory_email: String,
    pub loading_laboratories: bool,
    pub fetch_generation: u64,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Orders screen state.
#[derive(Debug, Clone)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub statistics: Vec<OrderStatistic>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub filters: OrderFilters,
    pub loading: bool,
    pub fetch_in_flight: bool,
    pub fetch_generation: u64,
    /// In-flight guard for status updates.
    pub updating: bool,
    pub error: Option<String>,
    pub selected_order_id: Option<String>,
    pub status_form: StatusUpdateForm,
}

impl Default for OrdersState {
    fn default() -> Self {
        OrdersState {
            orders: Vec::new(),
            statistics: Vec::new(),
            page: 1,
            total_pages: 1,
            total_items: 0,
            filters: OrderFilters::default(),
            loading: false,
            fetch_in_flight: false,
            fetch_generation: 0,
            updating: false,
            error: None,
            selected_order_id: None,
            status_form: StatusUpdateForm::default(),
        }
    }
}

impl OrdersState {
    pub fn selected_order(&self) -> Option<&Order> {
        let id = self.selected_order_id.as_deref()?;
        self.orders.iter().find(|order| order.id == id)
    }

    /// Total order count across all statuses.
    pub fn total_orders(&self) -> u64 {
        self.statistics.iter().map(|s| s.count).sum()
    }

    /// Total revenue across all statuses.
    pub fn total_revenue(&self) -> f64 {
        self.statistics.iter().map(|s| s.total_amount).sum()
    }

    /// Reset filters and jump back to the first page.
    pub fn clear_filters(&mut self) {
        self.filters = OrderFilters::default();
        self.page = 1;
    }
}

/// Global application state
pub struct AppState {
    /// Current active screen
    pub screen: Screen,
    /// UI language
    pub language: Language,
    /// Authenticated session, if any
    pub session: Option<Session>,
    /// Dashboard screen state
    pub dashboard: DashboardState,
    /// New test request screen state
    pub new_test: NewTestState,
    /// Orders screen state
    pub orders: OrdersState,
    /// API client (trait object so tests can inject a mock)
    pub api_client: Option<Arc<dyn ApiService>>,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            screen: Screen::Login,
            language: Language::English,
            session: None,
            dashboard: DashboardState::default(),
            new_test: NewTestState::default(),
            orders: OrdersState::default(),
            api_client: None,
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The current user, or a state error for screens that require one.
    pub fn current_user(&self) -> Result<&ApiUser> {
        self.session
            .as_ref()
            .map(|session| &session.user)
            .ok_or_else(|| AppError::State("no active session".to_string()))
    }

    pub fn notify(&mut self, level: &str, message: impl Into<String>) {
        self.pending_notifications
            .push((level.to_string(), message.into()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
