use envbind::bind;

#[derive(Debug, Default)]
struct Config {
    db_host: String,
    db_port: i64,
}

envbind::record! {
    Config {
        db_host: String => "DB_HOST",
        db_port: i64 => "DB_PORT,allow-empty",
    }
}

// Run with: DB_HOST=localhost cargo run --example allowempty
fn main() -> Result<(), envbind::BindError> {
    let mut config = Config::default();
    bind(&mut config)?;

    println!("{config:?}"); // Config { db_host: "localhost", db_port: 0 }

    // A caller-set default survives when the key is absent.
    let mut config = Config {
        db_host: String::new(),
        db_port: 12345,
    };
    bind(&mut config)?;

    println!("{config:?}"); // Config { db_host: "localhost", db_port: 12345 }
    Ok(())
}
