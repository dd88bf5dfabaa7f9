use envbind::{Binder, EnvSource};

#[derive(Debug, Default)]
struct Config {
    db_host: String,
    db_port: i64,
    db_user: String,
}

envbind::record! {
    Config {
        db_host: String => "DB_HOST",
        db_port: i64 => "DB_PORT",
        db_user: String => "DB_USER",
    }
}

// Reads a `.env` file from the working directory; its values take
// precedence over the process environment. Set ENVBIND_LOAD_DOTFILE=disable
// to skip the file.
fn main() -> Result<(), envbind::BindError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let mut config = Config::default();
    Binder::new()
        .with_override_file()
        .bind(&mut config, &EnvSource)?;

    println!("{config:?}");
    Ok(())
}
