//
// cli.rs
// Dicom-Catalog-rs
//
// Defines the CLI surface with Clap and dispatches each command to the catalog, resolver and decoder.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use dicom::object::mem::InMemElement;
use dicom_pixeldata::WindowLevel;
use serde::Serialize;

use crate::dataset::{DatasetParser, DicomFileParser};
use crate::dicom_access::{element_text, sequence_items};
use crate::hierarchy::Catalog;
use crate::image::{DecodeOptions, DicomFrameDecoder};
use crate::instance::Instance;
use crate::manager::Manager;
use crate::models::{CatalogSummary, LoadConfig, LoadMode, LoadReport, TagSummary};
use crate::resolver::{Precedence, Resolver};
use crate::tags::{self, Placement, TagDef};

#[derive(Parser)]
#[command(name = "dicom-catalog")]
#[command(about = "Browse DICOM folders as a patient/study/series tree and resolve tags", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load files or folders and print the patient tree
    Tree {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Parse files on the calling thread only
        #[arg(long)]
        sequential: bool,
        #[arg(long)]
        follow_links: bool,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Resolve one tag (keyword or GGGG,EEEE) in one file
    Tag {
        file: PathBuf,
        tag: String,
        #[arg(long)]
        frame: Option<usize>,
        /// Prefer values nested in the frame over shared ones
        #[arg(long)]
        per_frame_first: bool,
    },
    /// Print a tag's value at every frame of a file
    Frames { file: PathBuf, tag: String },
    /// List registry tags, optionally only those of one modality
    Tags {
        #[arg(long)]
        modality: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Decode one frame and save it as an image
    Export {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        frame: Option<usize>,
        #[arg(long)]
        window_center: Option<f64>,
        #[arg(long)]
        window_width: Option<f64>,
        #[arg(long)]
        normalize: bool,
        #[arg(long)]
        disable_modality_lut: bool,
        #[arg(long)]
        disable_voi_lut: bool,
        #[arg(long, conflicts_with = "force_16bit")]
        force_8bit: bool,
        #[arg(long)]
        force_16bit: bool,
    },
}

#[derive(Serialize)]
struct TreeOutput<'a> {
    catalog: CatalogSummary,
    report: &'a LoadReport,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Tree {
            paths,
            json,
            sequential,
            follow_links,
            max_depth,
        } => {
            let config = LoadConfig {
                parallel: !sequential,
                follow_links,
                max_depth,
            };
            let manager = Manager::new().with_config(config);
            let report = manager.load(&paths, LoadMode::Replace);
            let catalog = manager.snapshot();
            if json {
                let output = TreeOutput {
                    catalog: catalog.summary(),
                    report: &report,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_tree(&catalog);
                print_report(&report);
            }
        }
        Commands::Tag {
            file,
            tag,
            frame,
            per_frame_first,
        } => {
            let instance = open_instance(&file)?;
            let def = parse_tag(&tag)?;
            let precedence = if per_frame_first {
                Precedence::PerFrameFirst
            } else {
                Precedence::SharedFirst
            };
            let value = instance.get_tag_with(&Resolver::new(precedence), &def, frame)?;
            println!("{}: {}", def, display_value(value));
        }
        Commands::Frames { file, tag } => {
            let instance = open_instance(&file)?;
            let def = parse_tag(&tag)?;
            println!("{} ({} frame(s))", def, instance.frame_count());
            for (index, value) in instance.get_tags_per_frame(&def).into_iter().enumerate() {
                println!("  frame {:>4}: {}", index, display_value(value));
            }
        }
        Commands::Tags { modality, json } => {
            let entries: Vec<&TagDef> = match modality.as_deref() {
                Some(name) => tags::modality_set(name)
                    .ok_or_else(|| anyhow!("Unknown modality: {name}"))?,
                None => tags::all().iter().collect(),
            };
            if json {
                let summaries: Vec<TagSummary> = entries.iter().map(|def| tag_summary(def)).collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for def in entries {
                    let placement = if def.is_per_frame() { " [per-frame]" } else { "" };
                    println!("{} {:?} {}{}", def, def.vr(), def.keyword(), placement);
                }
            }
        }
        Commands::Export {
            file,
            output,
            frame,
            window_center,
            window_width,
            normalize,
            disable_modality_lut,
            disable_voi_lut,
            force_8bit,
            force_16bit,
        } => {
            let window = parse_window(window_center, window_width)?;
            let decoder = DicomFrameDecoder::new(DecodeOptions {
                window,
                normalize,
                disable_modality_lut,
                disable_voi_lut,
                force_8bit,
                force_16bit,
            });
            let instance = open_instance(&file)?;
            let image = instance.pixel_data(&decoder, frame)?;
            let output = output.unwrap_or_else(|| file.with_extension("png"));
            image
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Saved frame {} of {} to {}",
                frame.unwrap_or(0),
                file.display(),
                output.display()
            );
        }
    }

    Ok(())
}

fn open_instance(path: &Path) -> anyhow::Result<Instance> {
    let dataset = DicomFileParser
        .parse(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Instance::new(path, dataset))
}

fn parse_tag(text: &str) -> anyhow::Result<TagDef> {
    tags::parse_tag(text).ok_or_else(|| anyhow!("Not a tag keyword or (GGGG,EEEE) code: {text}"))
}

fn parse_window(center: Option<f64>, width: Option<f64>) -> anyhow::Result<Option<WindowLevel>> {
    match (center, width) {
        (Some(center), Some(width)) => Ok(Some(WindowLevel { center, width })),
        (None, None) => Ok(None),
        _ => bail!("Provide both --window-center and --window-width, or neither"),
    }
}

fn display_value(value: Option<&InMemElement>) -> String {
    let Some(element) = value else {
        return "<absent>".to_string();
    };
    if let Some(items) = sequence_items(element) {
        return format!("<sequence of {} item(s)>", items.len());
    }
    element_text(element).unwrap_or_else(|| "<empty>".to_string())
}

fn tag_summary(def: &TagDef) -> TagSummary {
    TagSummary {
        tag: format!("({:04X},{:04X})", def.group(), def.element()),
        keyword: def.keyword().to_string(),
        name: def.name().to_string(),
        vr: format!("{:?}", def.vr()),
        macros: def
            .macros()
            .iter()
            .map(|link| {
                let placement = match link.placement {
                    Placement::PerFrame => "per-frame",
                    Placement::Shared => "shared",
                };
                format!(
                    "({:04X},{:04X}) {}",
                    link.sequence.group(),
                    link.sequence.element(),
                    placement
                )
            })
            .collect(),
        per_frame: def.is_per_frame(),
    }
}

fn print_tree(catalog: &Catalog) {
    for patient in catalog.patients() {
        println!("{}", patient);
        for study in patient.studies() {
            println!("  {}", study);
            for series in study.series() {
                println!(
                    "    {} [{}] {} instance(s)",
                    series,
                    series.modality().unwrap_or("?"),
                    series.len()
                );
                for instance in series.instances() {
                    let number = instance
                        .instance_number()
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "      #{} {} ({:?}, {} frame(s))",
                        number,
                        instance.uid(),
                        instance.encoding(),
                        instance.frame_count()
                    );
                }
            }
        }
    }

    if !catalog.images().is_empty() {
        println!("Images:");
        for image in catalog.images() {
            let (width, height) = image.dimensions();
            println!("  {} ({}x{})", image.path().display(), width, height);
        }
    }
}

fn print_report(report: &LoadReport) {
    println!(
        "Loaded {} instance(s), {} image(s); {} duplicate(s) skipped, {} failure(s)",
        report.instances_loaded,
        report.images_loaded,
        report.duplicates_skipped,
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  {}: {}", failure.path.display(), failure.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_needs_both_values() {
        assert!(parse_window(Some(40.0), None).is_err());
        assert!(parse_window(None, None).unwrap().is_none());
        let window = parse_window(Some(40.0), Some(400.0)).unwrap().unwrap();
        assert_eq!((window.center, window.width), (40.0, 400.0));
    }

    #[test]
    fn command_line_parses_global_verbosity() {
        let cli = Cli::try_parse_from(["dicom-catalog", "tag", "-vv", "a.dcm", "PixelSpacing", "--frame", "2"])
            .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Tag { frame, per_frame_first, .. } => {
                assert_eq!(frame, Some(2));
                assert!(!per_frame_first);
            }
            _ => panic!("expected tag command"),
        }
    }

    #[test]
    fn tag_summary_lists_macros() {
        let spacing = tags::lookup_by_keyword("PixelSpacing").unwrap();
        let summary = tag_summary(spacing);
        assert_eq!(summary.tag, "(0028,0030)");
        assert_eq!(summary.macros, ["(0028,9110) shared"]);
        assert!(!summary.per_frame);
    }

    #[test]
    fn absent_values_are_labelled() {
        assert_eq!(display_value(None), "<absent>");
    }
}
