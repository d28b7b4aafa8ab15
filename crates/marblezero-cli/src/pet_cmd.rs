use marblezero::config::Config;

pub fn cmd_pet(name: Option<&str>) -> anyhow::Result<i32> {
    let mut config = Config::load_default()?;

    let Some(name) = name else {
        match config.pet_name() {
            Some(name) => println!("{name}"),
            None => eprintln!("[marblezero] your pet has no name yet; run `marblezero pet NAME`"),
        }
        return Ok(0);
    };

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("pet name must not be empty");
    }
    config.name = name.to_string();
    config.save_default()?;
    tracing::info!(name, "pet renamed");
    println!("your pet is now called {name}");
    Ok(0)
}
