// phem-evaluate: Segmentation quality of predicted parses against gold parses.
//
// Reads tab-separated lines `GOLD<TAB>PREDICTED`, each a morphemic parse in
// `text:LABEL/text:LABEL` notation (e.g. `под:PREF/вод:ROOT/н:SUFF/ый:END`),
// and prints boundary precision, recall, F1, letter accuracy and word accuracy.
//
// Usage:
//   phem-evaluate [FILE]

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if phem_cli::wants_help(&args) {
        println!("phem-evaluate: Segmentation quality of predicted parses.");
        println!();
        println!("Usage: phem-evaluate [FILE]");
        println!();
        println!("Reads GOLD<TAB>PREDICTED morphemic parses from FILE or stdin.");
        println!();
        println!("Options:");
        println!("  -h, --help              Print this help");
        return;
    }

    phem_cli::init_logging();

    let input = phem_cli::open_input(&args).unwrap_or_else(|e| phem_cli::fatal(&e));
    let report = phem_cli::evaluate_parses(input);

    println!("Words: {}", report.total_words);
    for (name, value) in report.metrics() {
        println!("{name}: {value:.4}");
    }
}
