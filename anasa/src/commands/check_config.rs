use anasa_config::Config;

pub fn check_config(config: &Config, verbose: bool) {
    if verbose {
        println!("{config:#?}");
    }
    println!(
        "Config ok: serving on {}, sending as {}",
        config.http.address, config.email.from
    );
}
