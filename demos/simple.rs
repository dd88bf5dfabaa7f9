use envbind::bind;

#[derive(Debug, Default)]
struct Config {
    db_host: String,
    db_port: i64,
}

envbind::record! {
    Config {
        db_host: String => "DB_HOST",
        db_port: i64 => "DB_PORT",
    }
}

// Run with: DB_HOST=localhost DB_PORT=5432 cargo run --example simple
fn main() -> Result<(), envbind::BindError> {
    let mut config = Config::default();
    bind(&mut config)?;

    println!("{config:?}"); // Config { db_host: "localhost", db_port: 5432 }
    Ok(())
}
