use std::path::Path;

use anyhow::Result;
use convert::HeightGrid;
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle};

struct MapToolsApp {
    // scene map conversion inputs
    shmd_path: String,
    mapping_path: String,
    resolved_json_path: String,
    missing_list_path: String,

    // terrain inputs
    hdt_path: String,
    hdtg_path: String,
    header_offset: i32,
    map_width: i32,
    map_height: i32,

    // shared across both conversions
    block_size: i32,

    // preview + status
    height_texture: Option<TextureHandle>,
    last_heights: Option<convert::NormalizedHeightResult>,
    status_message: String,
}

impl Default for MapToolsApp {
    fn default() -> Self {
        Self {
            shmd_path: String::new(),
            mapping_path: String::new(),
            resolved_json_path: String::new(),
            missing_list_path: String::new(),
            hdt_path: String::new(),
            hdtg_path: String::new(),
            header_offset: 0,
            map_width: 0,
            map_height: 0,
            block_size: convert::DEFAULT_BLOCK_SIZE as i32,
            height_texture: None,
            last_heights: None,
            status_message: String::new(),
        }
    }
}

// A labelled path field with a file-picker button
fn path_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value);
        if ui.button("…").clicked() {
            if let Some(picked) = rfd::FileDialog::new().pick_file() {
                *value = picked.display().to_string();
            }
        }
    });
}

// Same, but for a file that will be created
fn output_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value);
        if ui.button("…").clicked() {
            if let Some(picked) = rfd::FileDialog::new().save_file() {
                *value = picked.display().to_string();
            }
        }
    });
}

fn gray_pixels(grid: &HeightGrid) -> Vec<u8> {
    grid.cells
        .iter()
        .flat_map(|row| row.iter().map(|&v| (v * 255.0) as u8))
        .collect()
}

impl MapToolsApp {
    fn convert_prefabs(&self) -> Result<String> {
        let lines = artifacts::read_scene_lines(Path::new(&self.shmd_path))?;
        let mapping = artifacts::load_mapping(Path::new(&self.mapping_path))?;
        let extraction = convert::extract(&lines, &mapping, self.block_size as f32)?;

        artifacts::write_resolved(Path::new(&self.resolved_json_path), &extraction.resolved)?;
        artifacts::write_unresolved(Path::new(&self.missing_list_path), &extraction.unresolved)?;

        Ok(format!(
            "Extracted {} prefabs ({} missing mappings)",
            extraction.resolved.len(),
            extraction.unresolved.len()
        ))
    }

    fn generate_terrain(&mut self, ctx: &egui::Context) -> Result<String> {
        let header_offset = self.header_offset as usize;
        let width = self.map_width as usize;
        let height = self.map_height as usize;

        let base_bytes = artifacts::read_heightmap(Path::new(&self.hdt_path))?;
        let detail_bytes = artifacts::read_heightmap(Path::new(&self.hdtg_path))?;
        let base = convert::decode_raw32(&base_bytes, header_offset, width, height)?;
        let detail = convert::decode_raw32(&detail_bytes, header_offset, width, height)?;
        let heights = convert::compose(&base, &detail, self.block_size as f32)?;

        let gray = gray_pixels(&heights.normalized);
        let color_image = ColorImage::from_gray([width, height], &gray);
        self.height_texture =
            Some(ctx.load_texture("heights", color_image, egui::TextureOptions::NEAREST));

        let status = format!(
            "Generated {}x{} heights (range {:.2}, offset {:.3})",
            width, height, heights.vertical_range, heights.vertical_offset
        );
        self.last_heights = Some(heights);
        Ok(status)
    }
}

impl App for MapToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("SHMD Map Tools");
            ui.separator();

            ui.label(egui::RichText::new("SHMD Settings").strong());
            path_row(ui, "SHMD file", &mut self.shmd_path);
            ui.label("Prefabs have different paths in the engine, so a mapping file is required.");
            path_row(ui, "Mapping CSV", &mut self.mapping_path);
            output_row(ui, "Prefabs JSON", &mut self.resolved_json_path);
            ui.label("Source paths without a mapping row end up in this list.");
            output_row(ui, "Missing list", &mut self.missing_list_path);

            if ui.button("Convert prefabs").clicked() {
                self.status_message = if self.shmd_path.is_empty() {
                    "Assign SHMD file".into()
                } else if self.mapping_path.is_empty() {
                    "Assign mapping CSV".into()
                } else if self.resolved_json_path.is_empty() || self.missing_list_path.is_empty() {
                    "Assign output paths".into()
                } else if self.block_size <= 0 {
                    "Assign block size".into()
                } else {
                    match self.convert_prefabs() {
                        Ok(message) => message,
                        Err(e) => format!("Conversion error: {e:#}"),
                    }
                };
            }

            ui.separator();

            ui.label(egui::RichText::new("HDT(G) Paths").strong());
            path_row(ui, "HDT path", &mut self.hdt_path);
            path_row(ui, "HDTG path", &mut self.hdtg_path);
            ui.horizontal(|ui| {
                ui.label("Header offset");
                ui.add(egui::DragValue::new(&mut self.header_offset).speed(1.0));
            });

            ui.label(egui::RichText::new("Map Size").strong());
            ui.horizontal(|ui| {
                ui.label("Width");
                ui.add(egui::DragValue::new(&mut self.map_width).speed(1.0));
                ui.label("Height");
                ui.add(egui::DragValue::new(&mut self.map_height).speed(1.0));
            });

            ui.label(egui::RichText::new("Map Settings").strong());
            ui.label("Preset because every known map uses a block width of 50.");
            ui.horizontal(|ui| {
                ui.label("Block size");
                ui.add(egui::DragValue::new(&mut self.block_size).speed(1.0));
            });

            if ui.button("Generate heights").clicked() {
                self.status_message = if self.hdt_path.is_empty() || self.hdtg_path.is_empty() {
                    "Assign HDT and HDTG paths".into()
                } else if self.header_offset <= 0 {
                    "Assign header offset".into()
                } else if self.map_width <= 0 || self.map_height <= 0 {
                    "Assign width and height".into()
                } else if self.block_size <= 0 {
                    "Assign block size".into()
                } else {
                    match self.generate_terrain(ctx) {
                        Ok(message) => {
                            ctx.request_repaint();
                            message
                        }
                        Err(e) => format!("Terrain error: {e:#}"),
                    }
                };
            }

            if ui.button("Save heights PNG…").clicked() {
                if let Some(heights) = &self.last_heights {
                    let filename = format!("heights_{}x{}.png", self.map_width, self.map_height);
                    let gray = gray_pixels(&heights.normalized);
                    match image::save_buffer(
                        &filename,
                        &gray,
                        self.map_width as u32,
                        self.map_height as u32,
                        image::ColorType::L8,
                    ) {
                        Ok(()) => self.status_message = format!("Saved {}", filename),
                        Err(e) => self.status_message = format!("PNG error: {}", e),
                    }
                }
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.height_texture {
                let available = ui.available_size();
                ui.image((tex.id(), available));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Generate heights to see a preview");
                });
            }
        });
    }
}

fn main() {
    env_logger::init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 560.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "SHMD Map Tools",
        opts,
        Box::new(|_cc| Ok(Box::new(MapToolsApp::default()))),
    )
    .unwrap();
}
