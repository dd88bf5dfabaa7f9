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

// Run with DB_PORT unset to see the structured error:
// required key 'DB_PORT' is missing or empty
fn main() {
    let mut config = Config::default();

    match bind(&mut config) {
        Ok(()) => println!("{config:?}"),
        Err(err) => eprintln!("Error: {err}"),
    }
}
