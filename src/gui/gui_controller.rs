//! GUI controller
//!
//! Owns the Slint window and the listing state behind it. Everything runs on
//! the event-loop thread: callbacks borrow the shared state, update the
//! session and push a fresh row model to the window.

use crate::{Appearance, LaunchItem, MainWindow};
use folder_launcher::config::{ResolvedStyle, Rgb};
use folder_launcher::error::get_user_friendly_error;
use folder_launcher::launcher::{LaunchOutcome, Launcher};
use folder_launcher::scanner::{FileDescriptor, ScanOptions, ScanReport, scan_folder};
use folder_launcher::session::{CategoryFilter, ItemId, Session, item_label};
use folder_launcher::shortcut::IconLocation;
use folder_launcher::utils::{self, ICON_SIZE, SCREEN_MARGIN};
use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// State shared by the window callbacks
struct GuiState {
    folder: PathBuf,
    options: ScanOptions,
    session: Session,
    launcher: Launcher,
    /// Icons by source; `None` records a failed extraction so it is not retried
    icons: HashMap<IconLocation, Option<slint::Image>>,
    items: Rc<VecModel<LaunchItem>>,
    /// Last message shown under the list
    notice: Option<String>,
}

impl GuiState {
    fn icon_for(&mut self, descriptor: &FileDescriptor) -> Option<slint::Image> {
        let source = descriptor.icon_source();
        self.icons
            .entry(source)
            .or_insert_with_key(load_icon)
            .clone()
    }

    /// Rebuild the row model from the session's visible items
    fn rebuild_rows(&mut self) {
        let visible: Vec<(ItemId, FileDescriptor)> = self
            .session
            .visible()
            .map(|(id, d)| (id, d.clone()))
            .collect();

        let rows: Vec<LaunchItem> = visible
            .iter()
            .map(|(id, descriptor)| {
                let icon = self.icon_for(descriptor);
                LaunchItem {
                    id: i32::try_from(id.0).unwrap_or(i32::MAX),
                    label: item_label(descriptor).into(),
                    has_icon: icon.is_some(),
                    icon: icon.unwrap_or_default(),
                }
            })
            .collect();

        self.items.set_vec(rows);
    }

    fn status_text(&self) -> String {
        let shown = self.items.row_count();
        let total = self.session.len();
        let counts = if shown == total {
            format!("{total} items")
        } else {
            format!("{shown} of {total} items")
        };
        match &self.notice {
            Some(notice) => format!("{counts} | {notice}"),
            None => counts,
        }
    }
}

/// GUI controller that manages the launcher window
pub struct GuiController {
    window: MainWindow,
    state: Rc<RefCell<GuiState>>,
}

impl GuiController {
    /// Create the window for the items in `report`.
    pub fn new(
        folder: PathBuf,
        options: ScanOptions,
        report: ScanReport,
        style: &ResolvedStyle,
    ) -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        apply_style(&window, style);

        let items = Rc::new(VecModel::<LaunchItem>::default());
        window.set_items(ModelRc::from(Rc::clone(&items)));

        let categories: Vec<SharedString> = CategoryFilter::ALL
            .iter()
            .map(|category| SharedString::from(category.label()))
            .collect();
        window.set_categories(ModelRc::new(VecModel::from(categories)));

        let notice = skipped_notice(&report);
        let state = Rc::new(RefCell::new(GuiState {
            folder,
            options,
            session: Session::new(report.descriptors),
            launcher: Launcher::system(),
            icons: HashMap::new(),
            items,
            notice,
        }));

        let controller = Self { window, state };
        controller.connect_callbacks();
        controller.sync();
        controller.place_window(style);

        Ok(controller)
    }

    /// Show the window and run the event loop until it is closed
    pub fn run(self) -> Result<(), slint::PlatformError> {
        info!("Showing launcher window");
        self.window.run()
    }

    fn sync(&self) {
        update_window(&self.window, &mut self.state.borrow_mut());
    }

    fn connect_callbacks(&self) {
        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_filter_changed(move |text| {
            let Some(window) = weak.upgrade() else { return };
            let mut state = state.borrow_mut();
            state.session.set_filter(&text);
            update_window(&window, &mut state);
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_category_selected(move |index| {
            let Some(window) = weak.upgrade() else { return };
            let category = CategoryFilter::from_index(usize::try_from(index).unwrap_or(0));
            debug!("Category selected: {:?}", category);
            let mut state = state.borrow_mut();
            state.session.set_category(category);
            update_window(&window, &mut state);
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_activate(move |id| {
            let Some(window) = weak.upgrade() else { return };
            match usize::try_from(id) {
                Ok(id) => activate(&window, &state, ItemId(id)),
                Err(_) => warn!("Ignoring activation of invalid row id {}", id),
            }
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_activate_first(move || {
            let Some(window) = weak.upgrade() else { return };
            let first = state.borrow().session.first_visible();
            match first {
                Some(id) => activate(&window, &state, id),
                None => debug!("Enter pressed with no visible items"),
            }
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_refresh(move || {
            let Some(window) = weak.upgrade() else { return };
            refresh(&window, &state);
        });
    }

    fn place_window(&self, style: &ResolvedStyle) {
        let window = self.window.window();
        window.set_size(slint::LogicalSize::new(
            px(style.window_width),
            px(style.window_height),
        ));

        if !style.follow_cursor {
            return;
        }

        let Some((cursor, screen)) = utils::cursor_and_screen() else {
            debug!("Cursor position unavailable, leaving placement to the system");
            return;
        };

        let size = window.size();
        let (x, y) =
            utils::centered_on_cursor(cursor, (size.width, size.height), screen, SCREEN_MARGIN);
        debug!("Placing window at ({}, {}) near cursor {:?}", x, y, cursor);
        window.set_position(slint::PhysicalPosition::new(x, y));
    }
}

/// Launch the item behind `id` and report the result
fn activate(window: &MainWindow, state: &Rc<RefCell<GuiState>>, id: ItemId) {
    // The borrow must end before a modal dialog spins its own message loop
    let result = {
        let mut guard = state.borrow_mut();
        let GuiState {
            session, launcher, ..
        } = &mut *guard;
        session
            .get(id)
            .map(|d| d.display_name.clone())
            .and_then(|name| session.activate(id, launcher).map(|outcome| (name, outcome)))
    };

    let notice = match &result {
        Ok((name, LaunchOutcome::Spawned { pid, .. })) => match pid {
            Some(pid) => format!("Started {name} (pid {pid})"),
            None => format!("Started {name}"),
        },
        Ok((name, LaunchOutcome::Opened { .. })) => format!("Opened {name}"),
        Err(e) => e.to_string(),
    };

    {
        let mut state = state.borrow_mut();
        state.notice = Some(notice);
        update_window(window, &mut state);
    }

    if let Err(e) = result {
        show_error_dialog(&get_user_friendly_error(&e));
    }
}

/// Rescan the folder and replace the listing
fn refresh(window: &MainWindow, state: &Rc<RefCell<GuiState>>) {
    let scanned = {
        let state = state.borrow();
        info!("Refreshing {}", state.folder.display());
        scan_folder(&state.folder, &state.options)
    };

    let error = {
        let mut state = state.borrow_mut();
        let error = match scanned {
            Ok(report) => {
                state.notice = skipped_notice(&report);
                state.session.replace(report.descriptors);
                None
            }
            Err(e) => {
                warn!("Refresh failed: {}", e);
                state.notice = Some(e.to_string());
                Some(e)
            }
        };
        update_window(window, &mut state);
        error
    };

    if let Some(e) = error {
        show_error_dialog(&get_user_friendly_error(&e));
    }
}

fn update_window(window: &MainWindow, state: &mut GuiState) {
    state.rebuild_rows();
    let selected = CategoryFilter::ALL
        .iter()
        .position(|c| *c == state.session.category())
        .unwrap_or(0);
    window.set_selected_category(i32::try_from(selected).unwrap_or(0));
    window.set_status_text(state.status_text().into());
}

fn skipped_notice(report: &ScanReport) -> Option<String> {
    match report.skipped.len() {
        0 => None,
        1 => Some("1 shortcut could not be read".to_string()),
        n => Some(format!("{n} shortcuts could not be read")),
    }
}

fn load_icon(source: &IconLocation) -> Option<slint::Image> {
    match utils::extract_icon(source) {
        Ok(Some(rgba)) => {
            let edge = u32::try_from(ICON_SIZE).unwrap_or_default();
            let buffer =
                slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(&rgba, edge, edge);
            Some(slint::Image::from_rgba8(buffer))
        }
        Ok(None) => None,
        Err(e) => {
            warn!("No icon for {}: {}", source.path.display(), e);
            None
        }
    }
}

fn apply_style(window: &MainWindow, style: &ResolvedStyle) {
    let appearance = window.global::<Appearance>();
    let palette = &style.palette;

    appearance.set_background(color(palette.background));
    appearance.set_sidebar(color(palette.sidebar));
    appearance.set_button(color(palette.button));
    appearance.set_button_hover(color(palette.button_hover));
    appearance.set_button_pressed(color(palette.button_pressed));
    appearance.set_text(color(palette.text));
    appearance.set_list_background(color(palette.list_background));
    appearance.set_list_foreground(color(palette.list_foreground));
    appearance.set_selected(color(palette.selected));
    appearance.set_border(color(palette.border));
    appearance.set_header_background(color(palette.header_background));

    appearance.set_font_size(px(style.font_size));
    appearance.set_list_font_size(px(style.list_font_size));
    appearance.set_sidebar_font_size(px(style.sidebar_font_size));
    appearance.set_button_radius(px(style.button_radius));
    appearance.set_row_height(px(style.row_height));
    appearance.set_sidebar_width(px(style.sidebar_width));
    appearance.set_padding(px(style.padding));

    window.set_window_title(style.title.as_str().into());
}

fn color(rgb: Rgb) -> slint::Color {
    slint::Color::from_rgb_u8(rgb.r, rgb.g, rgb.b)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Style sizes are small integers, exactly representable as f32"
)]
fn px(value: u32) -> f32 {
    value as f32
}

/// Shows an error dialog without leaving the application.
#[cfg(windows)]
fn show_error_dialog(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Folder Launcher - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();
}

/// Shows an error dialog without leaving the application (non-Windows fallback).
#[cfg(not(windows))]
fn show_error_dialog(message: &str) {
    eprintln!("ERROR: {message}");
}
