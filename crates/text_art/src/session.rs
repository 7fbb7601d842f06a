use log::debug;

use crate::ascii::{command::DrawCommand, grid::BlockGrid, mapping};
use crate::config::{DisplayMode, ParamsUpdate, RenderParams, DEFAULT_DISPLAY_TEXT};
use crate::image_pipeline::{average, buffer::PixelBuffer};

/// State for converting one image: the current parameters, the decoded
/// image, its block grid and the most recent render.
///
/// Every update replaces the grid or command list wholesale. A step whose
/// input is missing (no image yet, no grid yet) does nothing and keeps the
/// previous result.
#[derive(Debug, Default)]
pub struct Session {
    params: RenderParams,
    buffer: Option<PixelBuffer>,
    grid: Option<BlockGrid>,
    commands: Vec<DrawCommand>,
}

impl Session {
    pub fn new(params: RenderParams) -> Self {
        Self { params, ..Default::default() }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn grid(&self) -> Option<&BlockGrid> {
        self.grid.as_ref()
    }

    /// Output of the last successful render.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replace the image, then recompute the grid and render.
    pub fn on_image_ready(&mut self, buffer: PixelBuffer) -> &[DrawCommand] {
        self.buffer = Some(buffer);
        self.recompute_grid();
        self.redraw()
    }

    /// Apply `update`, recomputing the grid only when the block size changed.
    ///
    /// An update without any field set leaves the previous output untouched.
    pub fn on_parameters_changed(&mut self, update: ParamsUpdate) -> &[DrawCommand] {
        if update.is_empty() {
            debug!("empty parameter update, keeping previous output");
            return &self.commands;
        }
        if update.apply(&mut self.params) {
            self.recompute_grid();
        }
        self.redraw()
    }

    /// Switch between color and monochrome output and render again.
    pub fn toggle_mode(&mut self) -> &[DrawCommand] {
        self.params.mode = self.params.mode.toggled();
        self.redraw()
    }

    pub fn recompute_grid(&mut self) -> Option<&BlockGrid> {
        let Some(buffer) = &self.buffer else {
            debug!("no image loaded, keeping previous grid");
            return self.grid.as_ref();
        };

        self.grid = Some(average::compute_grid(buffer, self.params.block()));
        self.grid.as_ref()
    }

    pub fn redraw(&mut self) -> &[DrawCommand] {
        let Some(grid) = &self.grid else {
            debug!("no grid computed yet, keeping previous output");
            return &self.commands;
        };

        self.commands = if self.params.mode == DisplayMode::Color
            && self.params.display_text.is_empty()
        {
            let params = RenderParams {
                display_text: DEFAULT_DISPLAY_TEXT.to_owned(),
                ..self.params.clone()
            };
            mapping::render(grid, &params)
        } else {
            mapping::render(grid, &self.params)
        };

        &self.commands
    }
}
