use std::env;
use std::path::Path;
use std::rc::Rc;

use colored::Colorize;
use log::info;
use patrones::{AppConfig, Component, CompositeConfig, Container, Leaf};

fn load_big_box(config: &CompositeConfig) -> Container {
    let mut small_box1 = config.container();
    small_box1.add(Rc::new(Leaf::new("Martillo")));

    let mut small_box2 = config.container();
    small_box2.add(Rc::new(Leaf::new("Telefono")));
    small_box2.add(Rc::new(Leaf::new("Auricular")));

    let mut small_box3 = config.container();
    small_box3.add(Rc::new(Leaf::new("Cargador")));

    let mut medium_box = config.container();
    medium_box.add(Rc::new(small_box2));
    medium_box.add(Rc::new(small_box3));

    let mut big_box = config.container();
    big_box.add(Rc::new(small_box1));
    big_box.add(Rc::new(medium_box));
    big_box.add(Rc::new(Leaf::new("Recibo")));
    big_box
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path)).unwrap_or_else(|err| {
            eprintln!("{} {err}, using defaults", "warning:".bold().yellow());
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    info!("remove policy: {:?}", config.composite.remove_policy);

    let big_box = load_big_box(&config.composite);
    println!(
        "{} {}",
        "Productos en el paquete:".bold().green(),
        big_box.operation()
    );
}
