//! CarouselEngine: owns the carousel state and drives every transition.
//!
//! A navigation is one synchronous call. `advance` clamps the request,
//! commits the new state in a single assignment, schedules media for the
//! new window and, when animating, runs the transition sequence:
//!
//! 1. publish `preFrameChange`, run the pre hook
//! 2. mark the tile holder busy
//! 3. show every tile, recompute the controls, hide every tile, show the
//!    current frame (controls change between the two full passes)
//! 4. focus the current tile
//! 5. clear the busy marker
//! 6. publish `postFrameChange`, run the post hook
//!
//! Hooks only ever see a `StateSnapshot`, so they cannot re-enter the
//! engine while a transition is running.

use carousel_contracts::prelude::*;
use tracing::{debug, info, warn};

use crate::accessibility::{AccessibilityStateToggler, AriaOp};
use crate::error::{CarouselError, ConfigurationError, HookPhase, Result};
use crate::layout::{center_controls, container_layout};
use crate::lazy_load::LazyLoadScheduler;
use crate::navigation::{NavigationButtonState, controls_spec};
use crate::options::{CarouselConfig, CarouselOptions, FrameHook, FrameHooks};
use crate::partition::{FramePartition, partition};
use crate::state::{CarouselState, TileRecord, resolve_target};

/// Whether a transition sequence is currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Transitioning,
}

/// Everything that exists only after a successful `init`.
#[derive(Debug)]
struct Session {
    config: CarouselConfig,
    hooks: FrameHooks,
    partition: FramePartition,
    tiles: Vec<TileRecord>,
    state: CarouselState,
    /// Enablement last pushed to the rendered controls.
    rendered_buttons: NavigationButtonState,
    aria: AccessibilityStateToggler,
    lazy: LazyLoadScheduler,
    handles: ContainerHandles,
    layout: ContainerLayout,
}

#[derive(Debug)]
pub struct CarouselEngine<H> {
    host: H,
    holder: NodeHandle,
    session: Option<Session>,
    phase: TransitionPhase,
}

impl<H: CarouselHost> CarouselEngine<H> {
    /// Create an engine for the tile holder `holder`. Nothing touches the
    /// host until [`CarouselEngine::init`].
    pub fn new(host: H, holder: NodeHandle) -> Self {
        Self {
            host,
            holder,
            session: None,
            phase: TransitionPhase::Idle,
        }
    }

    /// Build the carousel around `tiles`.
    ///
    /// Calling `init` on an initialized engine does nothing. A failed `init`
    /// leaves the engine uninitialized and the host untouched apart from the
    /// first tile's measurement.
    pub fn init(
        &mut self,
        tiles: Vec<TileSpec>,
        options: CarouselOptions,
    ) -> Result<()> {
        if self.session.is_some() {
            debug!(holder = %self.holder, "carousel already initialized, ignoring init");
            return Ok(());
        }

        let (config, hooks) = options.normalize()?;
        let first = tiles.first().ok_or(ConfigurationError::EmptyTileSequence)?;
        let metrics = self.host.measure(first.node);
        if metrics.is_degenerate() {
            return Err(ConfigurationError::ZeroTileWidth.into());
        }

        self.host.publish(LifecycleEvent::BeforeInit);

        let handles = self.host.wrap(self.holder);
        let partition = partition(tiles.len(), config.increment);
        let mut tiles: Vec<TileRecord> = tiles.into_iter().map(TileRecord::new).collect();
        let state = CarouselState::initial(&partition, metrics.width, metrics.height);
        let mut aria = AccessibilityStateToggler::new();

        if config.accessible {
            toggle(&mut self.host, &mut aria, &mut tiles, AriaOp::Hide);
            let frame = state.current_frame.clone();
            toggle(&mut self.host, &mut aria, &mut tiles[frame], AriaOp::Show);
        }

        let nodes: Vec<NodeHandle> = tiles.iter().map(|tile| tile.spec.node).collect();
        let layout = container_layout(&config, metrics.width);
        self.host.apply_layout(handles, &nodes, &layout);

        let buttons = NavigationButtonState::derive(0, config.increment, tiles.len());
        let controls = self
            .host
            .insert_controls(handles, &controls_spec(&config, buttons));
        if config.encapsulate_controls {
            let position = center_controls(
                layout.viewport_width,
                self.host.width(controls.prev),
                self.host.width(controls.next),
            );
            self.host.position_controls(position);
        }

        self.host.bind_controls(handles.region);
        let panels: Vec<NodeHandle> = tiles
            .iter()
            .filter(|tile| !tile.spec.is_spacer())
            .map(|tile| tile.spec.node)
            .collect();
        self.host.bind_tile_focus(&panels);

        let lazy = LazyLoadScheduler::new(tiles.len());

        info!(
            holder = %self.holder,
            tiles = tiles.len(),
            increment = config.increment,
            mode = %config.increment_mode,
            frames = partition.frame_count(),
            tile_delta = partition.tile_delta(),
            "carousel initialized"
        );

        self.session = Some(Session {
            config,
            hooks,
            partition,
            tiles,
            state,
            rendered_buttons: buttons,
            aria,
            lazy,
            handles,
            layout,
        });
        self.load_active_window();

        self.host.publish(LifecycleEvent::AfterInit);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn holder(&self) -> NodeHandle {
        self.holder
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> Option<&CarouselConfig> {
        self.session.as_ref().map(|session| &session.config)
    }

    pub fn partition(&self) -> Option<&FramePartition> {
        self.session.as_ref().map(|session| &session.partition)
    }

    pub fn state(&self) -> Option<&CarouselState> {
        self.session.as_ref().map(|session| &session.state)
    }

    pub fn container(&self) -> Option<ContainerHandles> {
        self.session.as_ref().map(|session| session.handles)
    }

    pub fn layout(&self) -> Option<&ContainerLayout> {
        self.session.as_ref().map(|session| &session.layout)
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> Result<StateSnapshot> {
        let session = self.session.as_ref().ok_or(CarouselError::NotInitialized)?;
        Ok(session.snapshot())
    }

    /// Move to the next frame (or tile, in tile mode).
    pub fn next(&mut self) -> Result<NodeHandle> {
        let session = self.session.as_ref().ok_or(CarouselError::NotInitialized)?;
        let requested = session.state.index as i64 + session.config.step() as i64;
        self.advance(requested, true)
    }

    /// Move to the previous frame (or tile, in tile mode).
    pub fn prev(&mut self) -> Result<NodeHandle> {
        let session = self.session.as_ref().ok_or(CarouselError::NotInitialized)?;
        let requested = session.state.index as i64 - session.config.step() as i64;
        self.advance(requested, true)
    }

    pub fn reset(&mut self) -> Result<NodeHandle> {
        self.advance(0, true)
    }

    /// Route a control activation by its logical identity.
    pub fn activate(&mut self, action: NavAction) -> Result<NodeHandle> {
        match action {
            NavAction::PrevFrame => self.prev(),
            NavAction::NextFrame => self.next(),
        }
    }

    /// Route a delegated click by the clicked control's class name. Clicks
    /// on anything other than `prevFrame` / `nextFrame` are ignored.
    pub fn dispatch_control(&mut self, class_name: &str) -> Result<Option<NodeHandle>> {
        match class_name.parse::<NavAction>() {
            Ok(action) => self.activate(action).map(Some),
            Err(err) => {
                debug!(%err, "ignoring click outside navigation controls");
                Ok(None)
            }
        }
    }

    /// Update the focus marker of a tile after a focus or blur event.
    /// Returns `false` when `node` is not a panel tile of this carousel or
    /// the marker did not change.
    pub fn tile_focus_changed(&mut self, node: NodeHandle, change: FocusChange) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(tile) = session.tiles.iter_mut().find(|tile| tile.spec.node == node) else {
            return false;
        };
        if !AccessibilityStateToggler::mark_focus(tile, change) {
            return false;
        }
        self.host.apply_accessibility(node, &tile.accessibility);
        true
    }

    /// Central transition primitive: clamp, commit, schedule media and,
    /// when `animate` is set, run the transition sequence. Returns the tile
    /// holder handle.
    ///
    /// Out-of-range requests are clamped, never rejected. State is committed
    /// before any hook runs, so a failing hook does not roll it back.
    pub fn advance(&mut self, requested: i64, animate: bool) -> Result<NodeHandle> {
        let session = self.session.as_mut().ok_or(CarouselError::NotInitialized)?;

        let target = resolve_target(&session.partition, session.config.increment_mode, requested);
        if target.index as i64 != requested {
            debug!(requested, index = target.index, "navigation request clamped");
        }
        session.state.commit(target);
        debug!(
            index = session.state.index,
            frame_index = session.state.frame_index(),
            prev_index = ?session.state.prev_index,
            current_tile = session.state.current_tile,
            "frame committed"
        );

        self.load_active_window();

        if animate {
            self.phase = TransitionPhase::Transitioning;
            let outcome = self.run_transition();
            self.phase = TransitionPhase::Idle;
            outcome?;
        }

        Ok(self.holder)
    }

    fn run_transition(&mut self) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Err(CarouselError::NotInitialized);
        };
        let host = &mut self.host;

        host.publish(LifecycleEvent::PreFrameChange);
        run_hook(session, HookPhase::PreFrameChange)?;

        host.set_busy(self.holder, true);

        if session.config.accessible {
            toggle(host, &mut session.aria, &mut session.tiles, AriaOp::Show);
        }

        let buttons = NavigationButtonState::derive(
            session.state.index,
            session.config.increment,
            session.tiles.len(),
        );
        for (action, enabled) in session.rendered_buttons.changes_to(&buttons) {
            host.swap_control(action, enabled);
        }
        session.rendered_buttons = buttons;

        if session.config.accessible {
            toggle(host, &mut session.aria, &mut session.tiles, AriaOp::Hide);
            let frame = session.state.current_frame.clone();
            toggle(host, &mut session.aria, &mut session.tiles[frame], AriaOp::Show);
        }

        let focus = session.tiles[session.state.current_tile].spec.node;
        host.focus(focus);

        host.set_busy(self.holder, false);

        host.publish(LifecycleEvent::PostFrameChange);
        run_hook(session, HookPhase::PostFrameChange)?;

        Ok(())
    }

    /// Request media for the tiles of the active window that have not been
    /// requested yet.
    fn load_active_window(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let frame = session.state.current_frame.clone();
        let Some(window) = session.lazy.pending_window(frame) else {
            return;
        };

        for index in session.lazy.request_load(window.start, window.end) {
            let tile = &mut session.tiles[index];
            if tile.spec.media.is_empty() {
                continue;
            }
            for media in tile.spec.media.iter_mut() {
                media.resolve();
            }
            self.host.load_media(tile.spec.node, &tile.spec.media);
        }
    }
}

impl Session {
    fn snapshot(&self) -> StateSnapshot {
        let state = &self.state;
        let buttons = NavigationButtonState::derive(
            state.index,
            self.config.increment,
            self.tiles.len(),
        );
        StateSnapshot {
            index: state.index,
            frame_index: state.frame_index(),
            prev_index: state.prev_index,
            prev_frame_index: state.prev_frame_index,
            frame_count: self.partition.frame_count(),
            tile_delta: self.partition.tile_delta(),
            current_tile: self.tiles[state.current_tile].spec.node,
            current_frame: self.tiles[state.current_frame.clone()]
                .iter()
                .map(|tile| tile.spec.node)
                .collect(),
            prev_enabled: buttons.prev_enabled,
            next_enabled: buttons.next_enabled,
            offset: state.offset(),
            tiles: self
                .tiles
                .iter()
                .enumerate()
                .map(|(index, tile)| tile.view(self.lazy.is_requested(index)))
                .collect(),
        }
    }
}

fn run_hook(session: &mut Session, phase: HookPhase) -> Result<()> {
    let present = match phase {
        HookPhase::PreFrameChange => session.hooks.pre.is_some(),
        HookPhase::PostFrameChange => session.hooks.post.is_some(),
    };
    if !present {
        return Ok(());
    }

    let snapshot = session.snapshot();
    let hook: Option<&mut FrameHook> = match phase {
        HookPhase::PreFrameChange => session.hooks.pre.as_mut(),
        HookPhase::PostFrameChange => session.hooks.post.as_mut(),
    };
    let Some(hook) = hook else {
        return Ok(());
    };

    hook.call(&snapshot).map_err(|source| {
        warn!(%phase, error = %source, "frame hook failed");
        CarouselError::Hook { phase, source }
    })
}

/// Run one accessibility pass and push the tiles it changed to the host.
fn toggle<H: TilePresenter>(
    host: &mut H,
    aria: &mut AccessibilityStateToggler,
    tiles: &mut [TileRecord],
    op: AriaOp,
) {
    for position in aria.apply(tiles, op) {
        let tile = &tiles[position];
        host.apply_accessibility(tile.spec.node, &tile.accessibility);
    }
}
