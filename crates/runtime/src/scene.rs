//! Named scenes and the director that switches between them.
//!
//! Only the current scene receives phase callbacks, so whatever a scene
//! reacts to lives exactly as long as the scene is active. Starting a scene
//! pushes the previous one onto the history; ending a scene resumes the most
//! recent entry of the history.

use std::collections::HashMap;

use tactics_core::World;
use tracing::{info, trace};

use crate::error::{Result, RuntimeError};
use crate::phase::{FrameContext, SceneRequest};

pub trait Scene {
    /// Unique name used to start the scene.
    fn name(&self) -> &str;

    fn on_start(&mut self, _world: &mut World) -> Result<()> {
        Ok(())
    }

    fn on_phase(&mut self, ctx: &mut FrameContext<'_>) -> Result<()>;

    fn on_end(&mut self, _world: &mut World) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct SceneDirector {
    scenes: HashMap<String, Box<dyn Scene>>,
    current: Option<String>,
    history: Vec<String>,
}

impl SceneDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, scene: Box<dyn Scene>) -> Result<()> {
        let name = scene.name().to_owned();
        if self.scenes.contains_key(&name) {
            return Err(RuntimeError::DuplicateScene(name));
        }
        self.scenes.insert(name, scene);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Names of suspended scenes, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn scene_mut(&mut self, name: &str) -> Result<&mut Box<dyn Scene>> {
        self.scenes
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownScene(name.to_owned()))
    }

    /// Ends the current scene (keeping it in the history) and starts `name`.
    pub fn start(&mut self, name: &str, world: &mut World) -> Result<()> {
        if !self.contains(name) {
            return Err(RuntimeError::UnknownScene(name.to_owned()));
        }

        if let Some(previous) = self.current.take() {
            self.scene_mut(&previous)?.on_end(world)?;
            self.history.push(previous);
        }

        self.scene_mut(name)?.on_start(world)?;
        self.current = Some(name.to_owned());
        info!(scene = name, depth = self.history.len(), "scene started");
        Ok(())
    }

    /// Ends the current scene and resumes the last one in the history.
    ///
    /// Returns the name of the scene that ended, `None` if none was running.
    pub fn end(&mut self, world: &mut World) -> Result<Option<String>> {
        let Some(ended) = self.current.take() else {
            return Ok(None);
        };
        self.scene_mut(&ended)?.on_end(world)?;

        if let Some(resumed) = self.history.pop() {
            self.scene_mut(&resumed)?.on_start(world)?;
            info!(ended = %ended, resumed = %resumed, "scene ended");
            self.current = Some(resumed);
        } else {
            info!(ended = %ended, "scene ended, none to resume");
        }
        Ok(Some(ended))
    }

    pub(crate) fn apply(&mut self, request: SceneRequest, world: &mut World) -> Result<()> {
        match request {
            SceneRequest::Start(name) => self.start(&name, world),
            SceneRequest::End => self.end(world).map(|_| ()),
        }
    }

    /// Hands the phase to the current scene, if any.
    pub fn dispatch(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        let Some(name) = self.current.clone() else {
            return Ok(());
        };
        trace!(scene = %name, phase = %ctx.phase, frame = ctx.frame, "dispatch");
        self.scene_mut(&name)?.on_phase(ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Scene for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn on_start(&mut self, _world: &mut World) -> Result<()> {
            self.log.borrow_mut().push(format!("start {}", self.name));
            Ok(())
        }

        fn on_phase(&mut self, _ctx: &mut FrameContext<'_>) -> Result<()> {
            Ok(())
        }

        fn on_end(&mut self, _world: &mut World) -> Result<()> {
            self.log.borrow_mut().push(format!("end {}", self.name));
            Ok(())
        }
    }

    fn director(log: &Rc<RefCell<Vec<String>>>) -> SceneDirector {
        let mut director = SceneDirector::new();
        for name in ["title", "dungeon"] {
            director
                .register(Box::new(Recorder {
                    name,
                    log: Rc::clone(log),
                }))
                .unwrap();
        }
        director
    }

    #[test]
    fn starting_suspends_the_current_scene() {
        let log = Rc::default();
        let mut director = director(&log);
        let mut world = World::new();

        director.start("title", &mut world).unwrap();
        director.start("dungeon", &mut world).unwrap();

        assert_eq!(director.current(), Some("dungeon"));
        assert_eq!(director.history(), ["title".to_owned()]);
        assert_eq!(
            *log.borrow(),
            ["start title", "end title", "start dungeon"]
        );
    }

    #[test]
    fn ending_resumes_from_history() {
        let log = Rc::default();
        let mut director = director(&log);
        let mut world = World::new();
        director.start("title", &mut world).unwrap();
        director.start("dungeon", &mut world).unwrap();

        let ended = director.end(&mut world).unwrap();

        assert_eq!(ended.as_deref(), Some("dungeon"));
        assert_eq!(director.current(), Some("title"));
        assert!(director.history().is_empty());
        assert_eq!(director.end(&mut world).unwrap().as_deref(), Some("title"));
        assert_eq!(director.current(), None);
        assert_eq!(director.end(&mut world).unwrap(), None);
    }

    #[test]
    fn unknown_and_duplicate_scenes_are_rejected() {
        let log = Rc::default();
        let mut director = director(&log);
        let mut world = World::new();

        assert!(matches!(
            director.start("shop", &mut world),
            Err(RuntimeError::UnknownScene(name)) if name == "shop"
        ));
        assert!(matches!(
            director.register(Box::new(Recorder {
                name: "title",
                log: Rc::clone(&log),
            })),
            Err(RuntimeError::DuplicateScene(_))
        ));
    }
}
