//! Plain-text diagnostics panel
//!
//! Lists the frame counters and every pool slot, dead ones included, so a
//! headless run can log what an on-screen panel would show.

use std::fmt::{self, Write};

use crate::context::AppContext;
use crate::ecs::EntityPool;

/// Text rendering of the pool for diagnostic display
pub struct EntityTable;

impl EntityTable {
    /// Render the header line and one row per slot
    pub fn render(pool: &EntityPool, context: &AppContext) -> String {
        let mut out = String::new();
        if let Err(e) = Self::write_table(&mut out, pool, context) {
            log::warn!("Entity table formatting failed: {e}");
        }
        out
    }

    /// Write the table into any formatter sink
    pub fn write_table<W: Write>(out: &mut W, pool: &EntityPool, context: &AppContext) -> fmt::Result {
        let clock = context.clock();

        writeln!(
            out,
            "frame {} | fps {} ({:.2} ms) | {} live / {} slots | {}",
            clock.frame_count(),
            clock.frames_per_second(),
            clock.frame_time_ms(),
            pool.live_count(),
            pool.len(),
            if context.is_paused() { "paused" } else { "running" },
        )?;
        writeln!(
            out,
            "{:>6} {:>4} {:<5} {:<12} {:<12} {:>26} {:>11}",
            "id", "gen", "alive", "model", "shader", "position", "color"
        )?;

        for entity in pool.entities() {
            let Some(slot) = pool.slot(entity.id.index()) else {
                continue;
            };
            let model = context.model(entity.model).map_or("?", |m| m.name());
            let shader = context.shader(entity.shader).map_or("?", |s| s.name());
            let p = slot.kinematics.position;
            let c = slot.debug_color;

            writeln!(
                out,
                "{:>6} {:>4} {:<5} {:<12} {:<12} {:>26} {:>11}",
                entity.id.index(),
                entity.id.generation(),
                entity.alive,
                model,
                shader,
                format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
                format!("({:.0}, {:.0}, {:.0})", c.x, c.y, c.z),
            )?;
        }

        Ok(())
    }
}
