//=========================================================================
// Game Runtime
//
// One running game bound to one container.
//
// Architecture:
// ```text
//     GameConfig ──Game::new(host)──>  Game  ──run()──>  [Runtime]
//                     │                 │
//                     ├─ validate       ├─ tick()   (headless / tests)
//                     ├─ resolve parent └─ run()    spawns logic thread,
//                     ├─ attach canvas              runs platform,
//                     └─ boot scene[0]              blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::config::{GameConfig, RendererType};
use crate::core::context::SceneContext;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{EventCollector, TickControl};
use crate::core::scale::{ScaleManager, Size};
use crate::core::scene::{SceneKey, SceneManager};
use crate::error::EngineError;
use crate::host::{Canvas, ContainerInfo, Host};
use crate::platform::Platform;

//=== Game ================================================================

/// A game instance bound to a host container.
///
/// Construction does all the work a launch needs: the configuration is
/// checked, the parent container resolved, a canvas attached to it and
/// the first configured scene started.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use aetheric_launcher::prelude::*;
///
/// let mut host = HeadlessHost::new().with_container("game-container", Size::new(390, 640));
/// let mut game = start_game("game-container", &mut host).unwrap();
///
/// assert_eq!(game.active_scenes(), vec![GameScene::Boot]);
/// game.tick(&[], Duration::from_millis(16));
/// ```
pub struct Game<S: SceneKey> {
    config: GameConfig<S>,
    canvas: Canvas,
    scale: ScaleManager,
    scenes: SceneManager<S>,
    context: SceneContext<S>,
}

impl<S: SceneKey> Game<S> {
    //--- Construction -----------------------------------------------------

    /// Boots a game from `config` inside `host`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Config`] if the configuration is unusable
    /// - [`EngineError::ContainerNotFound`] if `config.parent` does not resolve
    /// - [`EngineError::Host`] if the host refuses the canvas
    pub fn new<H: Host + ?Sized>(config: GameConfig<S>, host: &mut H) -> Result<Self, EngineError> {
        info!(
            target: "engine",
            "Booting game in `{}` ({}x{}, {} scenes)",
            config.parent,
            config.width,
            config.height,
            config.scenes.len()
        );

        config.validate()?;

        let container = host
            .container(&config.parent)
            .ok_or_else(|| EngineError::ContainerNotFound(config.parent.clone()))?;

        let renderer = resolve_renderer(config.renderer, &container, host.is_headless());
        let game_size = Size::new(config.width, config.height);
        let scale = ScaleManager::new(config.scale, config.auto_round, game_size, container.size);

        let canvas = Canvas {
            size: scale.game_size(),
            background: config.background_color,
            smoothing: !config.pixel_art,
            renderer,
        };
        host.attach(&config.parent, canvas.clone())?;

        let mut scenes = SceneManager::new();
        for entry in &config.scenes {
            scenes.register_scene(entry.key, (entry.create)());
        }

        let current = scale.game_size();
        let mut context = SceneContext::new(current.width, current.height);
        scenes.start(&mut context);

        info!(target: "engine", "Game booted with {:?} renderer", renderer);

        Ok(Self {
            config,
            canvas,
            scale,
            scenes,
            context,
        })
    }

    //--- Queries ----------------------------------------------------------

    pub fn config(&self) -> &GameConfig<S> {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scale(&self) -> &ScaleManager {
        &self.scale
    }

    /// Scenes updated on the next tick, bottom first.
    pub fn active_scenes(&self) -> Vec<S> {
        self.scenes.active_scenes()
    }

    /// Full scene stack, bottom first.
    pub fn scene_stack(&self) -> &[S] {
        self.scenes.stack()
    }

    pub fn context(&self) -> &SceneContext<S> {
        &self.context
    }

    //--- Update -----------------------------------------------------------

    /// Container size changed.
    ///
    /// In `Resize` mode the game size, and with it the canvas, follows
    /// the container.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.scale.resize(Size::new(width, height)) {
            let game = self.scale.game_size();
            self.canvas.size = game;
            self.context.set_game_size(game.width, game.height);
        }
    }

    /// Advances the game by one tick.
    ///
    /// `events` are in container pixels. Order of work:
    /// 1. pointer events mapped to game space and applied
    /// 2. active scenes updated
    /// 3. queued scene transitions applied
    pub fn tick(&mut self, events: &[InputEvent], delta: Duration) {
        for &event in events {
            let event = match event {
                InputEvent::PointerMoved { x, y } => {
                    let (x, y) = self.scale.to_game(x, y);
                    InputEvent::PointerMoved { x, y }
                }
                other => other,
            };
            self.context.pointer.apply(event);
        }

        self.context.time.advance(delta);
        self.scenes.update(&mut self.context);
        self.scenes.process_transitions(&mut self.context);
        self.context.pointer.end_tick();
    }

    /// One logic-thread step: drain platform events, apply the latest
    /// resize, tick the scenes.
    ///
    /// Returns [`TickControl::Exit`] once the window closed or the
    /// platform side of the channel is gone; nothing is ticked then.
    fn step(&mut self, collector: &mut EventCollector, delta: Duration) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        if let Some(size) = collector.resized() {
            self.resize(size.width, size.height);
        }

        let inputs = collector.take_inputs();
        self.tick(&inputs, delta);

        TickControl::Continue
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and runs the game until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → logic channel
    /// 2. Spawns the logic thread ticking at `config.fps`
    /// 3. Runs the platform event loop on this thread (blocks)
    /// 4. On window close: the logic thread sees `WindowClosed` and exits
    pub fn run(self) -> Result<(), EngineError> {
        const CHANNEL_CAPACITY: usize = 128;

        info!(target: "engine", "Starting runtime (fps: {})", self.config.fps);

        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        let title = self.config.parent.clone();
        let window_size = self.scale.parent_size();
        let canvas = self.canvas.clone();

        let logic = self.spawn_logic_thread(EventCollector::new(rx));

        let platform = Platform::new(title, window_size, canvas, tx);
        let platform_result = platform.run();

        if let Err(e) = &platform_result {
            error!(target: "engine", "Platform error: {}", e);
        }
        info!(target: "engine", "Platform event loop exited");

        match logic.join() {
            Ok(game) => info!(
                target: "engine",
                "Logic thread terminated cleanly after {} ticks",
                game.context.time.frame
            ),
            Err(e) => {
                error!(target: "engine", "Logic thread panicked: {:?}", e);
                platform_result?;
                return Err(EngineError::LogicThreadPanicked);
            }
        }

        platform_result?;
        info!(target: "engine", "Game shutdown complete");
        Ok(())
    }

    /// Fixed-rate logic loop fed by the platform. Hands the game back
    /// when the loop exits.
    fn spawn_logic_thread(mut self, mut collector: EventCollector) -> thread::JoinHandle<Self> {
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.config.fps));

        thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();

                if self.step(&mut collector, frame_start.duration_since(last_tick)) == TickControl::Exit {
                    info!(target: "engine", "Logic thread exiting");
                    break;
                }
                last_tick = frame_start;

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    warn!(target: "engine", "Tick overran its budget: {:?}", elapsed);
                }
            }

            self
        })
    }
}

//=== Renderer Selection ==================================================

/// Resolves `Auto` against what the host offers.
fn resolve_renderer(requested: RendererType, container: &ContainerInfo, headless: bool) -> RendererType {
    if headless {
        return RendererType::Headless;
    }

    match requested {
        RendererType::Auto if container.supports_gpu => RendererType::Gpu,
        RendererType::Auto => RendererType::Software,
        other => other,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
