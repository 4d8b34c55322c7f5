use crate::output::print_json;
use garden_core::haiku;

pub fn run(seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let mut rng = super::rng_from(seed);
    let title = haiku::title(&mut rng);
    let verse = haiku::pick(&mut rng);

    if json {
        let value = serde_json::json!({
            "title": title,
            "lines": verse,
        });
        return print_json(&value);
    }
    print!("{}", haiku::boxed(&title, verse));
    Ok(())
}
