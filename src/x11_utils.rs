use anyhow::{Context, Result};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::Event;
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as WrapperExt;

use crate::config::{Orientation, StripConfig};
use crate::constants::wm;
use crate::layout::{FramePlan, Rect};

/// Pre-cached X11 atoms to avoid repeated roundtrips
pub struct CachedAtoms {
    pub net_wm_window_type: Atom,
    pub net_wm_window_type_dock: Atom,
    pub net_wm_strut: Atom,
}

impl CachedAtoms {
    pub fn new(conn: &RustConnection) -> Result<Self> {
        // Do all intern_atom roundtrips once at startup
        Ok(Self {
            net_wm_window_type: conn
                .intern_atom(false, b"_NET_WM_WINDOW_TYPE")
                .context("Failed to intern _NET_WM_WINDOW_TYPE atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_WINDOW_TYPE atom")?
                .atom,
            net_wm_window_type_dock: conn
                .intern_atom(false, b"_NET_WM_WINDOW_TYPE_DOCK")
                .context("Failed to intern _NET_WM_WINDOW_TYPE_DOCK atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_WINDOW_TYPE_DOCK atom")?
                .atom,
            net_wm_strut: conn
                .intern_atom(false, b"_NET_WM_STRUT")
                .context("Failed to intern _NET_WM_STRUT atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STRUT atom")?
                .atom,
        })
    }
}

/// Pixel values for the four strip colors, allocated by name from the
/// default colormap
pub struct StripColors {
    pub background: u32,
    pub tick: u32,
    pub time: u32,
    pub highlight: u32,
}

impl StripColors {
    pub fn allocate(conn: &RustConnection, colormap: Colormap, config: &StripConfig) -> Result<Self> {
        Ok(Self {
            background: alloc_named_color(conn, colormap, &config.background)?,
            tick: alloc_named_color(conn, colormap, &config.tickcolor)?,
            time: alloc_named_color(conn, colormap, &config.timecolor)?,
            highlight: alloc_named_color(conn, colormap, &config.highcolor)?,
        })
    }
}

fn alloc_named_color(conn: &RustConnection, colormap: Colormap, name: &str) -> Result<u32> {
    let reply = conn
        .alloc_named_color(colormap, name.as_bytes())
        .with_context(|| format!("Failed to request allocation of color '{name}'"))?
        .reply()
        .with_context(|| format!("Cannot allocate color '{name}'"))?;
    Ok(reply.pixel)
}

/// Window position and size for a strip on the given edge: full axis
/// length along the edge, `size` pixels thick, anchored so the far
/// edges (bottom/right) hug the screen boundary
pub fn window_geometry(orientation: Orientation, size: u16, width: u16, height: u16) -> (i16, i16, u16, u16) {
    match orientation {
        Orientation::Top => (0, 0, width, size),
        Orientation::Bottom => (0, (height - size) as i16, width, size),
        Orientation::Left => (0, 0, size, height),
        Orientation::Right => ((width - size) as i16, 0, size, height),
    }
}

/// The strip window and its graphics context, exclusively owned by the
/// render loop. Wraps every collaborator call the loop needs so the
/// loop itself stays free of raw protocol plumbing.
pub struct DockWindow<'a> {
    conn: &'a RustConnection,
    pub window: Window,
    gc: Gcontext,
    pub colors: StripColors,
    /// Display extent along the time axis for this orientation
    pub axis_length: u16,
}

impl<'a> DockWindow<'a> {
    /// Create, decorate and map the dock window: WM_NAME, EWMH dock
    /// type, and a strut reserving `size` pixels on the occupied edge.
    pub fn create(
        conn: &'a RustConnection,
        screen: &Screen,
        atoms: &CachedAtoms,
        config: &StripConfig,
    ) -> Result<Self> {
        let colors = StripColors::allocate(conn, screen.default_colormap, config)?;

        let (x, y, width, height) = window_geometry(
            config.orientation,
            config.size,
            screen.width_in_pixels,
            screen.height_in_pixels,
        );
        debug!(x, y, width, height, "strip window geometry");

        let window = conn.generate_id().context("Failed to allocate window id")?;
        conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            window,
            screen.root,
            x,
            y,
            width,
            height,
            0,
            WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &CreateWindowAux::new()
                .background_pixel(colors.background)
                .event_mask(EventMask::EXPOSURE),
        )
        .context("Failed to create strip window")?;

        conn.change_property8(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            wm::WINDOW_NAME.as_bytes(),
        )
        .context("Failed to register WM_NAME")?;

        // become a dock so the window manager leaves us undecorated
        conn.change_property32(
            PropMode::REPLACE,
            window,
            atoms.net_wm_window_type,
            AtomEnum::ATOM,
            &[atoms.net_wm_window_type_dock],
        )
        .context("Failed to set _NET_WM_WINDOW_TYPE")?;

        // reserve our screen edge so other windows reflow around us
        let mut struts = [0u32; 4];
        struts[config.orientation.strut_slot()] = config.size as u32;
        conn.change_property32(
            PropMode::REPLACE,
            window,
            atoms.net_wm_strut,
            AtomEnum::CARDINAL,
            &struts,
        )
        .context("Failed to set _NET_WM_STRUT")?;

        let gc = conn.generate_id().context("Failed to allocate gcontext id")?;
        conn.create_gc(
            gc,
            window,
            &CreateGCAux::new()
                .foreground(colors.time)
                .graphics_exposures(0),
        )
        .context("Failed to create graphics context")?;

        conn.map_window(window).context("Failed to map strip window")?;
        conn.flush().context("Failed to flush after window setup")?;
        conn.sync().context("Failed to sync after window setup")?;

        let axis_length = if config.orientation.is_horizontal() {
            screen.width_in_pixels
        } else {
            screen.height_in_pixels
        };

        Ok(Self {
            conn,
            window,
            gc,
            colors,
            axis_length,
        })
    }

    /// Drain all pending events without blocking; report whether any
    /// of them was an exposure of our window
    pub fn drain_exposures(&self) -> Result<bool> {
        let mut exposed = false;
        while let Some(event) = self
            .conn
            .poll_for_event()
            .context("Lost connection to X server")?
        {
            if matches!(&event, Event::Expose(e) if e.window == self.window) {
                exposed = true;
            }
        }
        Ok(exposed)
    }

    /// Repaint one frame: clear, then marker, ticks and highlights in
    /// that order (the layering contract from the layout plan), then
    /// flush to the server
    pub fn draw(&self, plan: &FramePlan) -> Result<()> {
        self.conn
            .clear_area(false, self.window, 0, 0, 0, 0)
            .context("Failed to clear strip window")?;
        self.fill(self.colors.time, std::slice::from_ref(&plan.marker))?;
        self.fill(self.colors.tick, &plan.ticks)?;
        self.fill(self.colors.highlight, &plan.highlights)?;
        self.conn.flush().context("Failed to flush frame")?;
        Ok(())
    }

    fn fill(&self, pixel: u32, rects: &[Rect]) -> Result<()> {
        self.conn
            .change_gc(self.gc, &ChangeGCAux::new().foreground(pixel))
            .context("Failed to set fill color")?;
        let rects: Vec<Rectangle> = rects.iter().copied().map(Into::into).collect();
        self.conn
            .poly_fill_rectangle(self.window, self.gc, &rects)
            .context("Failed to fill rectangles")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_geometry_spans_full_edge() {
        assert_eq!(window_geometry(Orientation::Top, 3, 2560, 1440), (0, 0, 2560, 3));
        assert_eq!(window_geometry(Orientation::Bottom, 3, 2560, 1440), (0, 1437, 2560, 3));
        assert_eq!(window_geometry(Orientation::Left, 3, 2560, 1440), (0, 0, 3, 1440));
        assert_eq!(window_geometry(Orientation::Right, 3, 2560, 1440), (2557, 0, 3, 1440));
    }

    #[test]
    fn test_window_geometry_respects_thickness() {
        let (x, _, width, height) = window_geometry(Orientation::Right, 10, 1920, 1080);
        assert_eq!((x, width, height), (1910, 10, 1080));
    }
}
