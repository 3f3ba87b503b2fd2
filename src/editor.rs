//! The microphone board editor - owned state plus the event dispatcher.
//!
//! The editor exclusively owns the microphone collection, the view, the active
//! mode, the drag state, hover and the edit form. Hosts feed it `EditorEvent`s
//! in delivery order and react to the returned `Effect`s (redraw, open the
//! dialog, ...). Pointer handling lives in `crate::input`, split per event.

use crate::constants::TOOLTIP_OFFSET;
use crate::edit_form::EditForm;
use crate::error::{CoordinateField, EditError};
use crate::export::{self, ExportFormat};
use crate::grid::{self, GridLine};
use crate::host::{ClipboardSink, InputSource};
use crate::input::InputState;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::mic_set::MicrophoneSet;
use crate::settings::EditorSettings;
use crate::types::{MicId, Microphone, Mode, Point, ViewState, ViewportGeometry};
use serde::Deserialize;
use tracing::{debug, warn};

/// Raw input delivered by the host.
///
/// Pointer positions are relative to the top-left corner of the rendering surface.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    PointerDown { pos: Point },
    PointerMove { pos: Point },
    PointerUp { pos: Point },
    PointerLeave,
    /// Hover computed by the host's own hit testing
    Hover { id: Option<MicId> },
    SetMode { mode: Mode },
    Key { key: char },
    ZoomIn,
    ZoomOut,
    ResetView,
    Resize { width: f64, height: f64 },
    EditField { field: CoordinateField, text: String },
    SubmitEdit,
    CancelEdit,
}

/// Observable outcome of handling an event
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    MicrophoneAdded(Microphone),
    MicrophoneRemoved(MicId),
    MicrophoneUpdated(Microphone),
    ViewChanged(ViewState),
    HoverChanged(Option<MicId>),
    ModeChanged(Mode),
    EditDialogOpened(EditForm),
    EditDialogClosed,
    /// Edit submission rejected; the dialog stays open
    ValidationFailed(EditError),
}

/// A microphone marker ready to draw
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MicId,
    pub screen: Point,
    pub hovered: bool,
}

/// Hover tooltip text and its screen anchor
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: Point,
}

pub struct Editor {
    pub(crate) settings: EditorSettings,
    pub(crate) mics: MicrophoneSet,
    pub(crate) view: ViewState,
    pub(crate) viewport: ViewportGeometry,
    pub(crate) mode: Mode,
    pub(crate) input_state: InputState,
    pub(crate) hovered: Option<MicId>,
    /// Set once the host reports hover itself; internal hit testing then stays off
    pub(crate) host_hover: bool,
    pub(crate) edit_form: Option<EditForm>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        let settings = settings.sanitized();
        Self {
            view: ViewState::new(settings.default_zoom, Point::default()),
            mode: settings.default_mode,
            settings,
            mics: MicrophoneSet::new(),
            viewport: ViewportGeometry::default(),
            input_state: InputState::default(),
            hovered: None,
            host_hover: false,
            edit_form: None,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportGeometry) -> Self {
        self.viewport = viewport;
        self
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Apply one event and return what changed.
    pub fn handle(&mut self, event: EditorEvent) -> Vec<Effect> {
        match event {
            EditorEvent::PointerDown { pos } => self.handle_pointer_down(pos),
            EditorEvent::PointerMove { pos } => self.handle_pointer_move(pos),
            EditorEvent::PointerUp { pos } => self.handle_pointer_up(pos),
            EditorEvent::PointerLeave => self.handle_pointer_leave(),
            EditorEvent::Hover { id } => self.set_host_hover(id).into_iter().collect(),
            EditorEvent::SetMode { mode } => self.set_mode(mode).into_iter().collect(),
            EditorEvent::Key { key } => match Mode::from_key(key) {
                Some(mode) => self.set_mode(mode).into_iter().collect(),
                None => Vec::new(),
            },
            EditorEvent::ZoomIn => self.zoom_in().into_iter().collect(),
            EditorEvent::ZoomOut => self.zoom_out().into_iter().collect(),
            EditorEvent::ResetView => self.reset_view().into_iter().collect(),
            EditorEvent::Resize { width, height } => {
                self.resize(ViewportGeometry::new(width, height));
                Vec::new()
            }
            EditorEvent::EditField { field, text } => match self.set_edit_field(field, text) {
                Ok(()) => Vec::new(),
                Err(e) => vec![Effect::ValidationFailed(e)],
            },
            EditorEvent::SubmitEdit => self.submit_edit(),
            EditorEvent::CancelEdit => self.cancel_edit().into_iter().collect(),
        }
    }

    /// Drain an input source, returning every effect in order.
    pub fn run<S: InputSource + ?Sized>(&mut self, source: &mut S) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(event) = source.next_event() {
            effects.extend(self.handle(event));
        }
        effects
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn microphones(&self) -> &[Microphone] {
        self.mics.as_slice()
    }

    pub fn microphone(&self, id: MicId) -> Option<&Microphone> {
        self.mics.get(id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> &ViewportGeometry {
        &self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn hovered(&self) -> Option<MicId> {
        self.hovered
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::from_view(&self.view, &self.viewport)
    }

    // ------------------------------------------------------------------
    // Direct collection access
    // ------------------------------------------------------------------

    /// Add a microphone at a world position, bypassing the pointer gesture.
    /// Returns `None` for a non-finite position.
    pub fn add_microphone(&mut self, world: Point) -> Option<Microphone> {
        self.mics.add(world)
    }

    pub fn remove_microphone(&mut self, id: MicId) -> Option<Microphone> {
        let removed = self.mics.remove(id)?;
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        Some(removed)
    }

    pub fn update_microphone(&mut self, id: MicId, x: f64, y: f64) -> Option<Microphone> {
        self.mics.update(id, x, y)
    }

    // ------------------------------------------------------------------
    // Mode & hover
    // ------------------------------------------------------------------

    pub fn set_mode(&mut self, mode: Mode) -> Option<Effect> {
        if self.mode == mode {
            return None;
        }
        debug!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        Some(Effect::ModeChanged(mode))
    }

    /// Hover reported by the host's own hit testing.
    ///
    /// From then on pointer events no longer recompute hover, so a host whose
    /// hit area differs from `marker_radius_px` stays authoritative.
    pub fn set_host_hover(&mut self, id: Option<MicId>) -> Option<Effect> {
        if !self.host_hover {
            debug!("Host took over hover tracking");
            self.host_hover = true;
        }
        self.set_hovered(id)
    }

    pub fn host_hover(&self) -> bool {
        self.host_hover
    }

    /// Override hover for this moment. Unknown ids clear hover.
    pub fn set_hovered(&mut self, id: Option<MicId>) -> Option<Effect> {
        let id = id.filter(|id| self.mics.contains(*id));
        if self.hovered == id {
            return None;
        }
        self.hovered = id;
        Some(Effect::HoverChanged(id))
    }

    /// Topmost microphone whose marker covers the screen position
    pub fn hit_test(&self, screen: Point) -> Option<MicId> {
        let ctx = self.coordinate_context();
        let world = CoordinateConverter::screen_to_world(screen, &ctx);
        let radius = CoordinateConverter::length_screen_to_world(self.settings.marker_radius_px, ctx.zoom);
        self.mics.hit_test(world, radius)
    }

    pub(crate) fn refresh_hover(&mut self, screen: Point) -> Option<Effect> {
        if self.host_hover {
            return None;
        }
        let hit = self.hit_test(screen);
        self.set_hovered(hit)
    }

    // ------------------------------------------------------------------
    // Edit form
    // ------------------------------------------------------------------

    pub(crate) fn open_edit(&mut self, id: MicId) -> Option<Effect> {
        let mic = self.mics.get(id)?;
        let form = EditForm::open(mic);
        debug!(id = %id, "Edit dialog opened");
        self.edit_form = Some(form.clone());
        Some(Effect::EditDialogOpened(form))
    }

    pub fn set_edit_field(&mut self, field: CoordinateField, text: impl Into<String>) -> Result<(), EditError> {
        let form = self.edit_form.as_mut().ok_or(EditError::NoActiveEdit)?;
        form.set_field(field, text);
        Ok(())
    }

    /// Parse the form and move its microphone.
    ///
    /// Invalid input keeps the form open and reports `ValidationFailed`. A
    /// target that disappeared in the meantime closes the form without change.
    pub fn submit_edit(&mut self) -> Vec<Effect> {
        let Some(form) = self.edit_form.as_ref() else {
            return vec![Effect::ValidationFailed(EditError::NoActiveEdit)];
        };

        let (x, y) = match form.parse() {
            Ok(coords) => coords,
            Err(e) => {
                warn!("Rejected coordinate edit for {}: {}", form.target, e);
                return vec![Effect::ValidationFailed(e)];
            }
        };

        let target = form.target;
        let mut effects = Vec::new();
        if let Some(mic) = self.mics.update(target, x, y) {
            effects.push(Effect::MicrophoneUpdated(mic));
        }
        effects.extend(self.close_edit());
        effects
    }

    pub fn cancel_edit(&mut self) -> Option<Effect> {
        self.close_edit()
    }

    fn close_edit(&mut self) -> Option<Effect> {
        self.edit_form.take().map(|_| Effect::EditDialogClosed)
    }

    // ------------------------------------------------------------------
    // Rendering support
    // ------------------------------------------------------------------

    pub fn grid_lines(&self) -> Vec<GridLine> {
        grid::generate_grid_lines(
            self.settings.grid_size_m,
            self.settings.grid_divisions,
            &self.coordinate_context(),
        )
    }

    pub fn markers(&self) -> Vec<Marker> {
        let ctx = self.coordinate_context();
        self.mics
            .iter()
            .map(|mic| Marker {
                id: mic.id,
                screen: CoordinateConverter::world_to_screen(mic.position(), &ctx),
                hovered: self.hovered == Some(mic.id),
            })
            .collect()
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let mic = self.mics.get(self.hovered?)?;
        let screen = CoordinateConverter::world_to_screen(mic.position(), &self.coordinate_context());
        Some(Tooltip {
            text: export::tooltip_label(mic),
            anchor: screen.offset(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1),
        })
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn export(&self, format: ExportFormat) -> Result<String, serde_json::Error> {
        format.render(self.mics.as_slice())
    }

    /// Hand the export to a clipboard. Clipboard failures are logged and ignored.
    pub fn copy_to_clipboard(
        &self,
        sink: &mut dyn ClipboardSink,
        format: ExportFormat,
    ) -> Result<(), serde_json::Error> {
        let text = self.export(format)?;
        if let Err(e) = sink.write_text(&text) {
            warn!("Clipboard write failed: {:#}", e);
        }
        Ok(())
    }
}
