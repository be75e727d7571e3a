//! # Kiosk Runtime
//!
//! The single task that owns all kiosk state and drives it from events and
//! timers.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Kiosk::run                                   │
//! │                                                                         │
//! │  KioskHandle ──events──► ┌──────────────────────────────┐               │
//! │   key / manual / focus   │        tokio::select!        │               │
//! │   dismiss / slide        │                              │               │
//! │                          │  events      → InputRouter   │               │
//! │  fetch tasks ──results──►│  results     → Display       │──► Renderer   │
//! │   (one per submission,   │  reset timer → Display       │               │
//! │    generation tagged)    │  slide timer → Slideshow     │               │
//! │                          │  gap timer   → InputRouter   │               │
//! │                          └──────────────────────────────┘               │
//! │                                                                         │
//! │  Only this task mutates state. Fetches run in their own tasks and are  │
//! │  never cancelled; a result whose generation is stale is dropped.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pricecheck_core::{ImageLocations, ProductRecord, ProductView};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::config::KioskConfig;
use crate::display::{DisplayState, DisplayStateMachine, SearchTicket};
use crate::error::{KioskError, KioskResult};
use crate::fetch::ProductFetcher;
use crate::input::{InputRouter, Key};
use crate::render::Renderer;
use crate::slideshow::SlideshowController;

/// Capacity of the event channel.
const EVENT_BUFFER: usize = 256;

// =============================================================================
// Events
// =============================================================================

/// Something the outside world did to the kiosk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskEvent {
    /// A keystroke from the keyboard wedge (scanner or keyboard).
    Key(Key),

    /// Manual entry submitted via Enter or the Search button.
    ManualSubmit(String),

    /// Manual entry gained (`true`) or lost (`false`) focus.
    ManualFocus(bool),

    /// Tap outside the interactive controls.
    Dismiss,

    /// Slide indicator tapped.
    SelectSlide(i64),
}

/// A finished lookup, tagged with the submission it belongs to.
struct FetchOutcome {
    generation: u64,
    term: String,
    result: KioskResult<ProductRecord>,
}

// =============================================================================
// Kiosk
// =============================================================================

/// The kiosk runtime.
pub struct Kiosk {
    display: DisplayStateMachine,
    input: InputRouter,
    slideshow: SlideshowController,
    images: ImageLocations,

    fetcher: Arc<dyn ProductFetcher>,
    renderer: Arc<dyn Renderer>,

    /// Last published state, readable through the handle.
    snapshot: Arc<RwLock<DisplayState>>,

    event_rx: mpsc::Receiver<KioskEvent>,
    result_tx: mpsc::UnboundedSender<FetchOutcome>,
    result_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    shutdown_rx: mpsc::Receiver<()>,
}

/// Handle for driving a running [`Kiosk`] from outside.
///
/// Cloneable; the kiosk stops once every handle is dropped.
#[derive(Clone)]
pub struct KioskHandle {
    event_tx: mpsc::Sender<KioskEvent>,
    shutdown_tx: mpsc::Sender<()>,
    snapshot: Arc<RwLock<DisplayState>>,
}

impl Kiosk {
    /// Creates a kiosk and its handle. Call [`Kiosk::run`] to start it.
    pub fn new(
        config: &KioskConfig,
        slides: Vec<String>,
        fetcher: Arc<dyn ProductFetcher>,
        renderer: Arc<dyn Renderer>,
    ) -> (Self, KioskHandle) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let snapshot = Arc::new(RwLock::new(DisplayState::default()));

        let kiosk = Kiosk {
            display: DisplayStateMachine::new(config.auto_reset()),
            input: InputRouter::new(config.scanner_gap()),
            slideshow: SlideshowController::new(
                slides,
                &config.slides.fallback,
                config.slideshow_interval(),
            ),
            images: config.image_locations(),
            fetcher,
            renderer,
            snapshot: snapshot.clone(),
            event_rx,
            result_tx,
            result_rx,
            shutdown_rx,
        };

        let handle = KioskHandle {
            event_tx,
            shutdown_tx,
            snapshot,
        };

        (kiosk, handle)
    }

    /// Runs the kiosk loop until shutdown or until every handle is dropped.
    ///
    /// This should be spawned as a background task.
    pub async fn run(mut self) {
        info!(slides = self.slideshow.slides().len(), "Kiosk starting");

        self.slideshow.start(Instant::now());
        self.publish().await;

        loop {
            let reset_at = self.display.reset_deadline();
            let slide_at = self.slideshow.next_advance();
            let gap_at = self.input.gap_deadline();

            tokio::select! {
                event = self.event_rx.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => {
                        info!("All kiosk handles dropped");
                        break;
                    }
                },

                Some(outcome) = self.result_rx.recv() => {
                    self.handle_outcome(outcome).await;
                }

                _ = sleep_until(reset_at.unwrap_or_else(Instant::now)), if reset_at.is_some() => {
                    if self.display.fire_reset(Instant::now()) {
                        info!("Auto-reset to slideshow");
                        self.return_to_slideshow().await;
                    }
                }

                _ = sleep_until(slide_at.unwrap_or_else(Instant::now)), if slide_at.is_some() => {
                    if self.slideshow.on_tick(Instant::now()) {
                        self.renderer
                            .show_slide(self.slideshow.current(), self.slideshow.current_slide());
                    }
                }

                _ = sleep_until(gap_at.unwrap_or_else(Instant::now)), if gap_at.is_some() => {
                    self.input.on_gap_elapsed(Instant::now());
                }

                _ = self.shutdown_rx.recv() => {
                    info!("Kiosk received shutdown");
                    break;
                }
            }
        }

        info!("Kiosk stopped");
    }

    async fn handle_event(&mut self, event: KioskEvent) {
        let now = Instant::now();

        match event {
            KioskEvent::Key(Key::Escape) | KioskEvent::Dismiss => self.interrupt().await,

            KioskEvent::Key(key) => {
                if let Some(term) = self.input.on_key(&key, now) {
                    self.submit(term).await;
                }
            }

            KioskEvent::ManualSubmit(text) => match self.input.submit_manual(&text) {
                Ok(term) => self.submit(term).await,
                Err(e) => {
                    let err = KioskError::from(e);
                    warn!(error = %err, "Manual entry rejected");
                    self.renderer.alert(&err.user_message());
                }
            },

            KioskEvent::ManualFocus(focused) => self.input.set_manual_focus(focused),

            KioskEvent::SelectSlide(index) => {
                if matches!(self.display.state(), DisplayState::Slideshow) {
                    self.slideshow.select(index, now);
                    self.renderer
                        .show_slide(self.slideshow.current(), self.slideshow.current_slide());
                } else {
                    debug!(index, "Ignoring slide selection outside slideshow");
                }
            }
        }
    }

    /// Starts a lookup, superseding any in flight.
    async fn submit(&mut self, term: String) {
        let SearchTicket { generation, term } = self.display.submit(term);
        self.slideshow.stop();
        self.publish().await;

        info!(term = %term, generation, "Product lookup started");

        let fetcher = self.fetcher.clone();
        let result_tx = self.result_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch(&term).await;
            let _ = result_tx.send(FetchOutcome {
                generation,
                term,
                result,
            });
        });
    }

    async fn handle_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome {
            generation,
            term,
            result,
        } = outcome;

        let result = result.map(|record| ProductView::build(&record, &self.images));
        let summary = match &result {
            Ok(view) => format!("found {}", view.details.item_code),
            Err(e) => e.to_string(),
        };

        if self.display.complete(generation, result, Instant::now()) {
            match self.display.state() {
                DisplayState::ProductShown(_) => info!(term = %term, %summary, "Product shown"),
                _ => warn!(term = %term, %summary, "Product lookup failed"),
            }
            self.publish().await;
        }
    }

    async fn interrupt(&mut self) {
        if self.display.interrupt() {
            info!("Display interrupted, back to slideshow");
            self.return_to_slideshow().await;
        }
    }

    async fn return_to_slideshow(&mut self) {
        self.slideshow.start(Instant::now());
        self.publish().await;
    }

    /// Pushes the current state to the snapshot and the renderer.
    async fn publish(&self) {
        let state = self.display.state().clone();
        self.renderer.render(&state);
        if matches!(state, DisplayState::Slideshow) {
            self.renderer
                .show_slide(self.slideshow.current(), self.slideshow.current_slide());
        }
        *self.snapshot.write().await = state;
    }
}

// =============================================================================
// Kiosk Handle
// =============================================================================

impl KioskHandle {
    /// Sends an event to the kiosk.
    pub async fn send(&self, event: KioskEvent) -> KioskResult<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| KioskError::ShuttingDown)
    }

    /// Sends one keystroke.
    pub async fn key(&self, key: Key) -> KioskResult<()> {
        self.send(KioskEvent::Key(key)).await
    }

    /// Types `code` as a scanner burst followed by Enter.
    pub async fn scan(&self, code: &str) -> KioskResult<()> {
        for c in code.chars() {
            self.key(Key::Char(c)).await?;
        }
        self.key(Key::Enter).await
    }

    pub async fn submit_manual(&self, text: impl Into<String>) -> KioskResult<()> {
        self.send(KioskEvent::ManualSubmit(text.into())).await
    }

    pub async fn set_manual_focus(&self, focused: bool) -> KioskResult<()> {
        self.send(KioskEvent::ManualFocus(focused)).await
    }

    pub async fn dismiss(&self) -> KioskResult<()> {
        self.send(KioskEvent::Dismiss).await
    }

    pub async fn select_slide(&self, index: i64) -> KioskResult<()> {
        self.send(KioskEvent::SelectSlide(index)).await
    }

    /// Returns the last published display state.
    pub async fn state(&self) -> DisplayState {
        self.snapshot.read().await.clone()
    }

    /// Signals the kiosk to shut down gracefully.
    pub async fn shutdown(&self) -> KioskResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| KioskError::ChannelError("Shutdown channel closed".into()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::task::JoinHandle;
    use tokio::time::sleep;

    // -------------------------------------------------------------------------
    // Test doubles
    // -------------------------------------------------------------------------

    #[derive(Clone)]
    enum Reply {
        Found(Value),
        NotFound,
        Fail(String),
    }

    #[derive(Default)]
    struct MockFetcher {
        replies: HashMap<String, (Duration, Reply)>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        fn with(mut self, term: &str, delay_ms: u64, reply: Reply) -> Self {
            self.replies
                .insert(term.to_string(), (Duration::from_millis(delay_ms), reply));
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductFetcher for MockFetcher {
        async fn fetch(&self, term: &str) -> KioskResult<ProductRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay, reply) = self
                .replies
                .get(term)
                .cloned()
                .unwrap_or((Duration::ZERO, Reply::NotFound));
            sleep(delay).await;
            match reply {
                Reply::Found(body) => crate::fetch::decode_body(body, term),
                Reply::NotFound => Err(KioskError::ProductNotFound(term.to_string())),
                Reply::Fail(msg) => Err(KioskError::Transport(msg)),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Drawn {
        State(&'static str),
        Slide(usize),
        Alert(String),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        drawn: Mutex<Vec<Drawn>>,
    }

    impl RecordingRenderer {
        fn drawn(&self) -> Vec<Drawn> {
            self.drawn.lock().unwrap().clone()
        }

        fn count(&self, item: &Drawn) -> usize {
            self.drawn().iter().filter(|d| *d == item).count()
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, state: &DisplayState) {
            self.drawn.lock().unwrap().push(Drawn::State(state.name()));
        }

        fn show_slide(&self, index: usize, _slide: &str) {
            self.drawn.lock().unwrap().push(Drawn::Slide(index));
        }

        fn alert(&self, message: &str) {
            self.drawn.lock().unwrap().push(Drawn::Alert(message.to_string()));
        }
    }

    fn product(code: &str) -> Reply {
        Reply::Found(json!({ "itemCode": code, "normalPrice": "4.50", "balQty": "20" }))
    }

    fn config() -> KioskConfig {
        let mut config = KioskConfig::default();
        config.display.auto_reset_secs = 30;
        config.display.slideshow_interval_secs = 5;
        config.display.scanner_gap_ms = 100;
        config
    }

    fn spawn(
        fetcher: Arc<MockFetcher>,
        slides: Vec<String>,
    ) -> (KioskHandle, Arc<RecordingRenderer>, JoinHandle<()>) {
        let renderer = Arc::new(RecordingRenderer::default());
        let (kiosk, handle) = Kiosk::new(&config(), slides, fetcher, renderer.clone());
        let task = tokio::spawn(kiosk.run());
        (handle, renderer, task)
    }

    async fn settle() {
        sleep(Duration::from_millis(1)).await;
    }

    fn shown_code(state: &DisplayState) -> Option<String> {
        match state {
            DisplayState::ProductShown(view) => Some(view.details.item_code.clone()),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Tests
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_scan_shows_product() {
        let fetcher = Arc::new(MockFetcher::default().with("A100", 50, product("A100")));
        let (handle, renderer, _task) = spawn(fetcher.clone(), vec![]);

        handle.scan("A100").await.unwrap();
        settle().await;
        assert_eq!(
            handle.state().await,
            DisplayState::Loading {
                term: "A100".into()
            }
        );

        sleep(Duration::from_millis(100)).await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("A100"));
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(
            renderer.drawn()[..3],
            [
                Drawn::State("slideshow"),
                Drawn::Slide(0),
                Drawn::State("loading"),
            ]
        );
        assert_eq!(renderer.count(&Drawn::State("product")), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_result_for_old_term_is_ignored() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .with("A", 500, product("A"))
                .with("B", 100, product("B")),
        );
        let (handle, renderer, _task) = spawn(fetcher.clone(), vec![]);

        handle.scan("A").await.unwrap();
        handle.scan("B").await.unwrap();
        sleep(Duration::from_secs(1)).await;

        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("B"));
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(renderer.count(&Drawn::State("product")), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_early_result_for_old_term_is_ignored() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .with("A", 100, product("A"))
                .with("B", 500, product("B")),
        );
        let (handle, _renderer, _task) = spawn(fetcher, vec![]);

        handle.scan("A").await.unwrap();
        handle.scan("B").await.unwrap();

        sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.state().await, DisplayState::Loading { term: "B".into() });

        sleep(Duration::from_millis(400)).await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("B"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_reset_fires_exactly_once() {
        let fetcher = Arc::new(MockFetcher::default().with("A", 0, product("A")));
        let (handle, renderer, _task) = spawn(fetcher, vec![]);
        settle().await;

        handle.scan("A").await.unwrap();
        settle().await;
        assert!(shown_code(&handle.state().await).is_some());

        sleep(Duration::from_secs(29)).await;
        assert!(shown_code(&handle.state().await).is_some());

        sleep(Duration::from_millis(1100)).await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);

        sleep(Duration::from_secs(120)).await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);
        assert_eq!(renderer.count(&Drawn::State("slideshow")), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_search_supersedes_pending_reset() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .with("A", 0, product("A"))
                .with("B", 0, product("B")),
        );
        let (handle, _renderer, _task) = spawn(fetcher, vec![]);

        handle.scan("A").await.unwrap();
        settle().await;
        sleep(Duration::from_secs(20)).await;

        handle.scan("B").await.unwrap();
        settle().await;

        // A's reset would have fired at 30s.
        sleep(Duration::from_secs(15)).await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("B"));

        sleep(Duration::from_secs(16)).await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_and_failure_messages() {
        let fetcher = Arc::new(
            MockFetcher::default().with("DOWN", 0, Reply::Fail("connection refused".into())),
        );
        let (handle, _renderer, _task) = spawn(fetcher, vec![]);

        handle.scan("MISSING").await.unwrap();
        settle().await;
        assert_eq!(
            handle.state().await,
            DisplayState::Error {
                message: "Product not found".into()
            }
        );

        handle.scan("DOWN").await.unwrap();
        settle().await;
        assert_eq!(
            handle.state().await,
            DisplayState::Error {
                message: "connection refused".into()
            }
        );

        sleep(Duration::from_secs(31)).await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_prices_do_not_stop_the_kiosk() {
        let fetcher = Arc::new(
            MockFetcher::default()
                .with(
                    "A",
                    0,
                    Reply::Found(json!({ "itemCode": "A", "normalPrice": "-1e17", "memberPrice1": "1" })),
                )
                .with(
                    "B",
                    0,
                    Reply::Found(json!({
                        "itemCode": "B",
                        "normalPrice": "-1",
                        "memberPrice1": "1",
                        "promotion": { "minQty": "1e300" }
                    })),
                )
                .with("C", 0, product("C")),
        );
        let (handle, _renderer, task) = spawn(fetcher, vec![]);

        handle.scan("A").await.unwrap();
        settle().await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("A"));

        handle.scan("B").await.unwrap();
        settle().await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("B"));

        handle.dismiss().await.unwrap();
        handle.scan("C").await.unwrap();
        settle().await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("C"));
        assert!(!task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_and_escape_interrupt() {
        let fetcher = Arc::new(MockFetcher::default().with("A", 0, product("A")));
        let (handle, renderer, _task) = spawn(fetcher, vec![]);

        handle.scan("A").await.unwrap();
        settle().await;
        handle.dismiss().await.unwrap();
        settle().await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);

        handle.scan("A").await.unwrap();
        settle().await;
        handle.set_manual_focus(true).await.unwrap();
        handle.key(Key::Escape).await.unwrap();
        settle().await;
        assert_eq!(handle.state().await, DisplayState::Slideshow);

        // Neither interrupted display resets again later.
        sleep(Duration::from_secs(60)).await;
        assert_eq!(renderer.count(&Drawn::State("slideshow")), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_entry() {
        let fetcher = Arc::new(MockFetcher::default().with("A100", 0, product("A100")));
        let (handle, renderer, _task) = spawn(fetcher.clone(), vec![]);

        handle.set_manual_focus(true).await.unwrap();
        handle.scan("999").await.unwrap();
        handle.submit_manual("   ").await.unwrap();
        settle().await;

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(handle.state().await, DisplayState::Slideshow);
        assert_eq!(
            renderer.count(&Drawn::Alert(
                "Please enter an item code, barcode, or subcode".into()
            )),
            1
        );

        handle.submit_manual(" A100 ").await.unwrap();
        settle().await;
        assert_eq!(shown_code(&handle.state().await).as_deref(), Some("A100"));

        // Focus was released, so the scanner works again.
        handle.scan("A100").await.unwrap();
        settle().await;
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scanner_gap_drops_partial_code() {
        let fetcher = Arc::new(MockFetcher::default());
        let (handle, _renderer, _task) = spawn(fetcher.clone(), vec![]);

        handle.key(Key::Char('1')).await.unwrap();
        handle.key(Key::Char('2')).await.unwrap();
        sleep(Duration::from_millis(150)).await;
        handle.key(Key::Enter).await.unwrap();
        settle().await;

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(handle.state().await, DisplayState::Slideshow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slideshow_rotates_and_pauses() {
        let fetcher = Arc::new(MockFetcher::default().with("A", 0, product("A")));
        let slides = vec!["s0".to_string(), "s1".to_string(), "s2".to_string()];
        let (handle, renderer, _task) = spawn(fetcher, slides);
        settle().await;

        sleep(Duration::from_millis(5_100)).await;
        assert_eq!(renderer.count(&Drawn::Slide(1)), 1);

        handle.select_slide(-1).await.unwrap();
        settle().await;
        assert_eq!(renderer.count(&Drawn::Slide(2)), 1);

        handle.scan("A").await.unwrap();
        settle().await;
        let before = renderer.drawn().len();
        sleep(Duration::from_secs(20)).await;
        assert_eq!(renderer.drawn().len(), before);

        // Reset at 30s restarts from the first slide.
        sleep(Duration::from_secs(11)).await;
        assert_eq!(renderer.drawn().last(), Some(&Drawn::Slide(0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_slide_ignored_while_product_shown() {
        let fetcher = Arc::new(MockFetcher::default().with("A", 0, product("A")));
        let slides = vec!["s0".to_string(), "s1".to_string()];
        let (handle, renderer, _task) = spawn(fetcher, slides);

        handle.scan("A").await.unwrap();
        settle().await;
        handle.select_slide(1).await.unwrap();
        settle().await;

        assert_eq!(renderer.count(&Drawn::Slide(1)), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_and_drop() {
        let fetcher = Arc::new(MockFetcher::default());
        let (handle, _renderer, task) = spawn(fetcher.clone(), vec![]);
        handle.shutdown().await.unwrap();
        task.await.unwrap();
        assert!(handle.dismiss().await.is_err());

        let (handle, _renderer, task) = spawn(fetcher, vec![]);
        drop(handle);
        task.await.unwrap();
    }
}
