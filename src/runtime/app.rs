use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use quill::commands::Cmd;
use quill::input::command_from_key;
use quill::messages::{AppMsg, Msg};
use quill::model::AppModel;
use quill::update::update;

use crate::view::Renderer;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// First fatal error, reported by `main` after the loop exits
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("Quill")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, &self.model)?;

        let size = window.inner_size();
        self.model.resize(size.width, size.height);
        tracing::info!("Initialised window with size {}*{}", size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Result<Option<Cmd>> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height)?;
                }
                Ok(update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(size.width, size.height)),
                ))
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Ok(command_from_key(&event.logical_key)
                    .and_then(|command| update(&mut self.model, Msg::Edit(command))))
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.render(&self.model)?;
                }
                Ok(None)
            }

            _ => Ok(None),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{:#}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match self.handle_event(&event) {
            Ok(Some(cmd)) if cmd.needs_redraw() => window.request_redraw(),
            Ok(_) => {}
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
