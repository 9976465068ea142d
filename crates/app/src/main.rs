use std::path::{Path, PathBuf};
use std::process;

use arbora_core::{
    apply_branching_order_cache, build_report, invoke_kernel, layout_arbor, maximum_branching_order,
    parse_swc, render_text, report_to_json, Aggregation,
};
use arbora_skeleton::Morphology;

struct Args {
    input: PathBuf,
    json_path: Option<PathBuf>,
    dendrogram: bool,
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("arbora: {err}");
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let parsed = parse_args(args)?;

    let mut morphology = load_morphology(&parsed.input)?;
    tracing::info!(
        label = %morphology.label,
        sections = morphology.section_count(),
        arbors = morphology.arbor_count(),
        "loaded morphology"
    );

    let report = build_report(&morphology);

    if !parsed.quiet {
        print!("{}", render_text(&report));
    }

    if let Some(path) = &parsed.json_path {
        let json = report_to_json(&report).map_err(|err| err.to_string())?;
        std::fs::write(path, json).map_err(|err| err.to_string())?;
        tracing::info!("wrote report to {:?}", path);
    }

    if parsed.dendrogram {
        print_dendrograms(&mut morphology);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut json_path = None;
    let mut dendrogram = false;
    let mut quiet = false;
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--json requires a path".to_string())?;
                json_path = Some(PathBuf::from(value));
            }
            "--dendrogram" => {
                dendrogram = true;
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option {other}"));
            }
            other => {
                if input.is_some() {
                    return Err("only one input file is accepted".to_string());
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let input = input.ok_or_else(|| "an input .swc file is required".to_string())?;
    Ok(Args {
        input,
        json_path,
        dendrogram,
        quiet,
    })
}

fn print_help() {
    println!(
        "Usage: arbora <morphology.swc> [options]\n  --json <path>   write the analysis report as JSON\n  --dendrogram    print dendrogram layouts per arbor\n  --quiet         suppress the text report"
    );
}

fn load_morphology(path: &Path) -> Result<Morphology, String> {
    let text = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "morphology".to_string());
    parse_swc(&text, &label).map_err(|err| format!("{err:?}"))
}

fn print_dendrograms(morphology: &mut Morphology) {
    let orders = invoke_kernel(morphology, maximum_branching_order, Aggregation::Maximum);
    apply_branching_order_cache(morphology, &orders);

    let roots: Vec<_> = morphology
        .arbors()
        .map(|arbor| (arbor.root, arbor.kind.label().to_string()))
        .collect();
    for (root, label) in roots {
        let layout = layout_arbor(morphology, root);
        println!(
            "{label}: {} segments, {} connectors",
            layout.segments.len(),
            layout.connectors.len()
        );
        for segment in &layout.segments {
            println!(
                "  x {:>8.2}  y {:>8.2} -> {:>8.2}  order {}",
                segment.x, segment.path_start, segment.path_end, segment.branching_order
            );
        }
    }
}
