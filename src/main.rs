// Same-screen two-player chess on an isometric "diamond map" board,
// rendered with egui. The rule engine lives in the board/pieces/movegen/game
// modules; this file is only the frontend.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)]

use eframe::egui;

mod board;
mod game;
mod geometry;
mod movegen;
mod pieces;

use board::TileShade;
use game::{ClickOutcome, GameState};
use pieces::{Color, Piece, PieceKind, sprite_name};

// ────────────────────────────────────────────────────────────────────────────────
// UI constants and helpers
// ────────────────────────────────────────────────────────────────────────────────

// Tile palette: light/dark by parity, the warm pair for highlighted tiles.
const LIGHT: egui::Color32 = egui::Color32::from_rgb(204, 238, 255);
const DARK: egui::Color32 = egui::Color32::from_rgb(15, 39, 111);
const LIGHT_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(255, 155, 73);
const DARK_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(249, 124, 56);

fn shade_color(shade: TileShade) -> egui::Color32 {
    match shade {
        TileShade::Light => LIGHT,
        TileShade::Dark => DARK,
        TileShade::LightHighlight => LIGHT_HIGHLIGHT,
        TileShade::DarkHighlight => DARK_HIGHLIGHT,
    }
}

// Outline glyphs for white, filled for black.
fn glyph(kind: PieceKind, color: Color) -> &'static str {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => "♙",
        (Color::White, PieceKind::Rook) => "♖",
        (Color::White, PieceKind::Knight) => "♘",
        (Color::White, PieceKind::Bishop) => "♗",
        (Color::White, PieceKind::Queen) => "♕",
        (Color::White, PieceKind::King) => "♔",
        (Color::Black, PieceKind::Pawn) => "♟",
        (Color::Black, PieceKind::Rook) => "♜",
        (Color::Black, PieceKind::Knight) => "♞",
        (Color::Black, PieceKind::Bishop) => "♝",
        (Color::Black, PieceKind::Queen) => "♛",
        (Color::Black, PieceKind::King) => "♚",
        (Color::None, _) => "",
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
        Color::None => "",
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// App
// ────────────────────────────────────────────────────────────────────────────────

struct MyApp {
    game: GameState,

    // UI state
    window_title: String,
    start_new_game: bool,
}

impl Default for MyApp {
    fn default() -> Self {
        Self {
            game: GameState::new(),
            window_title: "Diamond chess — White to move".to_owned(),
            start_new_game: false,
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1050.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Diamond chess",
        options,
        Box::new(|cc| {
            // Enable image loading (e.g. png, jpg) for egui
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::<MyApp>::default())
        }),
    )
}

impl MyApp {
    fn title_for(&self, outcome: &ClickOutcome) -> Option<String> {
        match outcome {
            ClickOutcome::Moved { mover, captured: Some(taken), .. } => {
                if self.game.is_game_over() {
                    Some(format!(
                        "{} takes {} — game over, {} wins!",
                        sprite_name(mover.kind, mover.color),
                        sprite_name(taken.kind, taken.color),
                        color_name(mover.color)
                    ))
                } else {
                    Some(format!(
                        "{} takes {} — {} to move",
                        sprite_name(mover.kind, mover.color),
                        sprite_name(taken.kind, taken.color),
                        color_name(self.game.active_color())
                    ))
                }
            }
            ClickOutcome::Moved { .. } | ClickOutcome::Cancelled => Some(format!(
                "Diamond chess — {} to move",
                color_name(self.game.active_color())
            )),
            ClickOutcome::Selected { .. } | ClickOutcome::Ignored => None,
        }
    }

    fn captured_glyphs(&self, color: Color) -> String {
        self.game
            .captured()
            .iter()
            .filter(|p| p.color == color)
            .map(|p| glyph(p.kind, p.color))
            .collect()
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Tweak UI scale to keep the board crisp on most displays.
        ctx.set_pixels_per_point(1.5);

        if self.start_new_game {
            self.game.reset();
            self.start_new_game = false;
            self.window_title = "Diamond chess — White to move".to_owned();
        }

        // ───────────────────────────────────────────
        // Left side panel
        // ───────────────────────────────────────────
        egui::SidePanel::left("side_panel").show(ctx, |ui| {
            ui.ctx()
                .send_viewport_cmd(egui::ViewportCommand::Title(self.window_title.clone()));

            ui.heading("Diamond chess");

            if self.game.is_game_over() {
                ui.label("Game over");
            } else {
                ui.label(format!("{} to move", color_name(self.game.active_color())));
            }

            if ui.button("New Game").clicked() {
                self.start_new_game = true;
            }

            ui.separator();
            ui.label("Captured:");
            ui.label(format!("White: {}", self.captured_glyphs(Color::White)));
            ui.label(format!("Black: {}", self.captured_glyphs(Color::Black)));
        });

        // ───────────────────────────────────────────
        // Central panel (board)
        // ───────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let central_rect = ui.min_rect();
            let center = central_rect.center();

            // Fit the diamond's bounding box into the available area.
            let scale = (available_size.x / geometry::BOARD_PIXEL_WIDTH)
                .min(available_size.y / geometry::BOARD_PIXEL_HEIGHT)
                .max(0.1);
            let origin = egui::pos2(
                center.x - geometry::BOARD_PIXEL_WIDTH * scale / 2.0,
                center.y - geometry::BOARD_PIXEL_HEIGHT * scale / 2.0,
            );
            let to_screen =
                |(x, y): (f32, f32)| egui::pos2(origin.x + x * scale, origin.y + y * scale);

            let board_rect = egui::Rect::from_min_size(
                origin,
                egui::vec2(
                    geometry::BOARD_PIXEL_WIDTH * scale,
                    geometry::BOARD_PIXEL_HEIGHT * scale,
                ),
            );
            let response = ui.allocate_rect(board_rect, egui::Sense::click());

            // Resolve a click to board coordinates; the per-cell diamond
            // containment check rejects clicks between tiles that truncate
            // into an edge cell.
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let lx = (pos.x - origin.x) / scale;
                    let ly = (pos.y - origin.y) / scale;
                    let (row, col) = geometry::screen_to_board(lx, ly);
                    if geometry::in_bounds(row, col)
                        && self
                            .game
                            .board()
                            .cell(row as usize, col as usize)
                            .quad
                            .contains(lx, ly)
                    {
                        let outcome = self.game.click(row, col);
                        if let Some(title) = self.title_for(&outcome) {
                            self.window_title = title;
                        }
                    }
                }
            }

            // Paint tiles, then pieces on top.
            let painter = ui.painter();
            for cell in self.game.board().cells() {
                let quad = cell.quad;
                let points = vec![
                    to_screen(quad.top),
                    to_screen(quad.right),
                    to_screen(quad.bottom),
                    to_screen(quad.left),
                ];
                painter.add(egui::Shape::convex_polygon(
                    points,
                    shade_color(cell.shade()),
                    egui::Stroke::NONE,
                ));
            }

            let mut pieces: Vec<&Piece> = self.game.pieces().all().collect();
            // Draw back-to-front so overlapping glyphs stack naturally.
            pieces.sort_by_key(|p| (p.row, p.col));
            for piece in pieces {
                let center = to_screen(geometry::tile_center(piece.row, piece.col));
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    glyph(piece.kind, piece.color),
                    egui::FontId::proportional(geometry::TILE_HEIGHT * scale * 0.95),
                    egui::Color32::BLACK,
                );
            }
        });
    }
}
