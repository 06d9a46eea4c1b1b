use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;

use envimote_server::app::create_app;
use envimote_server::configs::settings::{Auth, DataLog, Logger, Server, Settings};
use envimote_server::configs::storage::Storage;

static NEXT_LOG: AtomicUsize = AtomicUsize::new(0);

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
    pub data_file: PathBuf,
}

impl MockApp {
    pub fn new() -> Self {
        let unique = NEXT_LOG.fetch_add(1, Ordering::Relaxed);
        let data_file = std::env::temp_dir().join(format!(
            "envimote-test-{}-{unique}.csv",
            std::process::id()
        ));
        // Every test app starts from an empty log.
        let _ = std::fs::remove_file(&data_file);

        let settings = Arc::new(Settings {
            server: Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: Logger {
                level: String::from("debug"),
            },
            auth: Auth {
                username: String::from("admin"),
                password: String::from("admin"),
            },
            storage: DataLog {
                path: data_file.to_string_lossy().into_owned(),
            },
        });

        let storage = Arc::new(Storage::new(&settings.storage.path).unwrap());
        let router = create_app(&settings, storage.clone());

        Self {
            router,
            storage,
            data_file,
        }
    }
}

impl Drop for MockApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.data_file);
    }
}
