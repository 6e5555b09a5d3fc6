//! Session registry: the engine's public entry points.
//!
//! # Lifecycle (for beginners)
//!
//! The engine can only inject input while the OS has granted it the
//! assistive-technology capability.  The platform glue calls
//! [`SessionRegistry::install`] when the grant arrives and
//! [`SessionRegistry::revoke`] when it is withdrawn.  In between, exactly one
//! [`EngineSession`] exists.
//!
//! Callers never hold a nullable pointer to the session.  They call
//! [`registry()`] and use `send_key`, `send_text`, `perform_action`, or
//! `send`; with no session installed those return `false`, and
//! [`SessionRegistry::current`] returns [`SessionError::Unavailable`].
//!
//! Every command runs on the session's UI thread; the calling thread blocks
//! until the dispatcher has an answer.

use std::sync::{Arc, PoisonError, RwLock};

use kiosk_input_core::{ActionKind, CapabilityLevel, Command, KeyCode, Modifiers};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::dispatcher::InjectionDispatcher;
use super::host::AccessibilityHost;
use super::ui_thread::{UiThread, UiThreadError};

/// Error type for session lifecycle operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no engine session is installed")]
    Unavailable,
    #[error("an engine session is already installed")]
    AlreadyInstalled,
    #[error("UI thread error: {0}")]
    UiThread(#[from] UiThreadError),
}

/// A running engine: one host, one dispatcher, one UI thread.
pub struct EngineSession {
    id: Uuid,
    host: Arc<dyn AccessibilityHost>,
    dispatcher: Arc<InjectionDispatcher>,
    ui_thread: UiThread,
}

impl EngineSession {
    fn start(
        host: Arc<dyn AccessibilityHost>,
        dispatcher: InjectionDispatcher,
    ) -> Result<Self, SessionError> {
        let id = Uuid::new_v4();
        let ui_thread = UiThread::spawn("kiosk-ui")?;
        let session = Self {
            id,
            host,
            dispatcher: Arc::new(dispatcher),
            ui_thread,
        };
        session.connect();
        Ok(session)
    }

    /// Requests the input-method capability where the OS offers it.
    fn connect(&self) {
        let level = self.host.capability_level();
        if !level.supports(CapabilityLevel::DIRECT_INPUT) {
            return;
        }
        let host = Arc::clone(&self.host);
        match self.ui_thread.run_sync(move || host.enable_input_method()) {
            Ok(Ok(())) => debug!(session = %self.id, "input method enabled"),
            Ok(Err(e)) => warn!(session = %self.id, error = %e, "could not enable input method"),
            Err(e) => warn!(session = %self.id, error = %e, "could not enable input method"),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Delivers `command` on the UI thread.
    pub fn send(&self, command: Command) -> bool {
        let host = Arc::clone(&self.host);
        let dispatcher = Arc::clone(&self.dispatcher);
        let kind = command.kind_name();
        match self
            .ui_thread
            .run_sync(move || dispatcher.send(host.as_ref(), &command))
        {
            Ok(delivered) => delivered,
            Err(e) => {
                warn!(session = %self.id, kind, error = %e, "dispatch did not complete");
                false
            }
        }
    }
}

/// Holds at most one installed [`EngineSession`].
pub struct SessionRegistry {
    slot: RwLock<Option<Arc<EngineSession>>>,
}

impl SessionRegistry {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Installs a session for `host`.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyInstalled`] if a session is running, or
    /// [`SessionError::UiThread`] if the UI thread cannot be started.
    pub fn install(
        &self,
        host: Arc<dyn AccessibilityHost>,
        dispatcher: InjectionDispatcher,
    ) -> Result<Arc<EngineSession>, SessionError> {
        if self.is_available() {
            return Err(SessionError::AlreadyInstalled);
        }
        let level = host.capability_level();
        // Started outside the lock: connecting runs on the UI thread, which
        // may itself consult the registry.
        let session = Arc::new(EngineSession::start(host, dispatcher)?);

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            debug!(session = %session.id(), "another session won the install; discarding");
            return Err(SessionError::AlreadyInstalled);
        }
        *slot = Some(Arc::clone(&session));
        drop(slot);

        info!(session = %session.id(), %level, chain = ?session.dispatcher.chain(), "engine session installed");
        Ok(session)
    }

    /// Removes the installed session.  Returns `false` if there was none.
    ///
    /// Commands already running finish; later calls see no session.
    pub fn revoke(&self) -> bool {
        let removed = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match removed {
            Some(session) => {
                info!(session = %session.id(), "engine session revoked");
                true
            }
            None => false,
        }
    }

    /// The installed session.
    ///
    /// # Errors
    ///
    /// [`SessionError::Unavailable`] when nothing is installed.
    pub fn current(&self) -> Result<Arc<EngineSession>, SessionError> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(SessionError::Unavailable)
    }

    pub fn is_available(&self) -> bool {
        self.current().is_ok()
    }

    /// Delivers `command` through the installed session.
    pub fn send(&self, command: Command) -> bool {
        match self.current() {
            Ok(session) => session.send(command),
            Err(_) => {
                debug!(kind = command.kind_name(), "no session; command dropped");
                false
            }
        }
    }

    pub fn send_key(&self, code: KeyCode, modifiers: Modifiers) -> bool {
        self.send(Command::key_with(code, modifiers))
    }

    pub fn send_text(&self, text: impl Into<String>) -> bool {
        self.send(Command::text(text))
    }

    pub fn perform_action(&self, kind: ActionKind) -> bool {
        self.send(Command::action(kind))
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: SessionRegistry = SessionRegistry::new();

/// The process-wide registry.
pub fn registry() -> &'static SessionRegistry {
    &GLOBAL
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatcher::DispatchOptions;
    use crate::application::strategies::shell_fallback::MockCommandRunner;
    use crate::application::host::{GestureStroke, HostError, InputChannel, RawNode};
    use crate::infrastructure::host::simulated::SimulatedHost;
    use kiosk_input_core::{FocusKind, GlobalAction, NodeAction, NodeInfo};

    fn dispatcher() -> InjectionDispatcher {
        let mut runner = MockCommandRunner::new();
        runner.expect_spawn().returning(|_, _| Ok(()));
        InjectionDispatcher::standard(&DispatchOptions::default(), Arc::new(runner))
    }

    #[test]
    fn test_calls_without_session_return_false() {
        // Arrange
        let registry = SessionRegistry::new();

        // Act / Assert
        assert!(!registry.is_available());
        assert!(matches!(registry.current(), Err(SessionError::Unavailable)));
        assert!(!registry.send_key(KeyCode::BACK, Modifiers::NONE));
        assert!(!registry.send_text("a"));
        assert!(!registry.perform_action(ActionKind::Home));
    }

    #[test]
    fn test_installed_session_dispatches() {
        let registry = SessionRegistry::new();
        let host = Arc::new(SimulatedHost::new());
        registry.install(host.clone(), dispatcher()).unwrap();

        assert!(registry.is_available());
        assert!(registry.perform_action(ActionKind::Back));
        assert_eq!(host.global_actions(), vec![GlobalAction::Back]);
    }

    #[test]
    fn test_second_install_is_rejected() {
        let registry = SessionRegistry::new();
        let first = registry
            .install(Arc::new(SimulatedHost::new()), dispatcher())
            .unwrap();

        let second = registry.install(Arc::new(SimulatedHost::new()), dispatcher());

        assert!(matches!(second, Err(SessionError::AlreadyInstalled)));
        assert_eq!(registry.current().unwrap().id(), first.id());
    }

    #[test]
    fn test_revoke_makes_engine_unavailable() {
        let registry = SessionRegistry::new();
        registry
            .install(Arc::new(SimulatedHost::new()), dispatcher())
            .unwrap();

        assert!(registry.revoke());
        assert!(!registry.revoke());
        assert!(!registry.is_available());
        assert!(!registry.perform_action(ActionKind::Back));
    }

    #[test]
    fn test_reinstall_after_revoke_gets_fresh_session() {
        let registry = SessionRegistry::new();
        let first = registry
            .install(Arc::new(SimulatedHost::new()), dispatcher())
            .unwrap()
            .id();
        registry.revoke();

        let second = registry
            .install(Arc::new(SimulatedHost::new()), dispatcher())
            .unwrap()
            .id();

        assert_ne!(first, second);
    }

    #[test]
    fn test_install_enables_input_method_at_direct_input_level() {
        let registry = SessionRegistry::new();
        let host = Arc::new(SimulatedHost::new().with_level(33));

        registry.install(host.clone(), dispatcher()).unwrap();

        assert_eq!(host.ime_enable_calls(), 1);
    }

    #[test]
    fn test_install_skips_input_method_on_older_levels() {
        let registry = SessionRegistry::new();
        let host = Arc::new(SimulatedHost::new().with_level(30));

        registry.install(host.clone(), dispatcher()).unwrap();

        assert_eq!(host.ime_enable_calls(), 0);
    }

    #[test]
    fn test_input_method_failure_does_not_block_install() {
        let registry = SessionRegistry::new();
        let host = Arc::new(SimulatedHost::new());
        host.set_ime_enable_error(true);

        let session = registry.install(host.clone(), dispatcher());

        assert!(session.is_ok());
        assert_eq!(host.ime_enable_calls(), 1);
    }

    /// Host whose input-method request looks up the registry it is being
    /// installed into, as platform glue running on the UI thread might.
    struct ReentrantHost {
        inner: SimulatedHost,
        registry: &'static SessionRegistry,
        seen_during_connect: std::sync::Mutex<Option<bool>>,
    }

    impl AccessibilityHost for ReentrantHost {
        fn capability_level(&self) -> CapabilityLevel {
            self.inner.capability_level()
        }
        fn display_size(&self) -> kiosk_input_core::DisplaySize {
            self.inner.display_size()
        }
        fn enable_input_method(&self) -> Result<(), HostError> {
            let available = self.registry.is_available();
            *self.seen_during_connect.lock().unwrap() = Some(available);
            self.inner.enable_input_method()
        }
        fn perform_global_action(&self, action: GlobalAction) -> Result<bool, HostError> {
            self.inner.perform_global_action(action)
        }
        fn input_channel(&self) -> Result<Option<Arc<dyn InputChannel>>, HostError> {
            self.inner.input_channel()
        }
        fn dispatch_gesture(&self, stroke: &GestureStroke) -> Result<bool, HostError> {
            self.inner.dispatch_gesture(stroke)
        }
        fn active_root(&self) -> Result<Option<RawNode>, HostError> {
            self.inner.active_root()
        }
        fn find_focus(&self, root: RawNode, kind: FocusKind) -> Result<Option<RawNode>, HostError> {
            self.inner.find_focus(root, kind)
        }
        fn node_info(&self, node: RawNode) -> Result<NodeInfo, HostError> {
            self.inner.node_info(node)
        }
        fn child(&self, node: RawNode, index: usize) -> Result<Option<RawNode>, HostError> {
            self.inner.child(node, index)
        }
        fn parent(&self, node: RawNode) -> Result<Option<RawNode>, HostError> {
            self.inner.parent(node)
        }
        fn perform_node_action(&self, node: RawNode, action: &NodeAction) -> Result<bool, HostError> {
            self.inner.perform_node_action(node, action)
        }
        fn release(&self, node: RawNode) {
            self.inner.release(node)
        }
    }

    #[test]
    fn test_connect_may_consult_registry_while_installing() {
        // Arrange
        static REGISTRY: SessionRegistry = SessionRegistry::new();
        let host = Arc::new(ReentrantHost {
            inner: SimulatedHost::new().with_level(33),
            registry: &REGISTRY,
            seen_during_connect: std::sync::Mutex::new(None),
        });

        // Act: completes instead of blocking on the registry lock
        let session = REGISTRY.install(host.clone(), dispatcher());

        // Assert
        assert!(session.is_ok());
        assert_eq!(*host.seen_during_connect.lock().unwrap(), Some(false));
        assert!(REGISTRY.is_available());
        assert_eq!(host.inner.ime_enable_calls(), 1);
        REGISTRY.revoke();
    }

    #[test]
    fn test_session_is_shared_across_threads() {
        let registry = Arc::new(SessionRegistry::new());
        let host = Arc::new(SimulatedHost::new());
        registry.install(host.clone(), dispatcher()).unwrap();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.perform_action(ActionKind::Home))
            })
            .collect();

        assert!(workers.into_iter().all(|w| w.join().unwrap()));
        assert_eq!(host.global_actions().len(), 4);
    }
}
