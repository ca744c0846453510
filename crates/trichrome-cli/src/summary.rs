use console::Style;
use trichrome_core::frame::ChannelOffsets;
use trichrome_core::pipeline::config::{AlignmentMethod, PipelineConfig};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();
    let alignment = &config.alignment;

    println!();
    println!("  {}", s.title.apply_to("Trichrome"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Alignment"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(&alignment.method)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Metric"),
        s.value.apply_to(alignment.metric)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Crop"),
        s.value.apply_to(format!("{:.0}%", alignment.crop_fraction * 100.0))
    );
    if !matches!(alignment.method, AlignmentMethod::Exhaustive(_)) {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Downsample"),
            s.value.apply_to(alignment.downsample)
        );
    }
    if config.save_channels {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Channels"),
            s.value.apply_to("saved separately")
        );
    }
    println!();
}

pub fn print_offsets(offsets: &ChannelOffsets) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Displacements (relative to blue)"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Green"),
        s.value.apply_to(offsets.green)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Red"),
        s.value.apply_to(offsets.red)
    );
}
