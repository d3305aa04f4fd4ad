#[cfg(test)]
pub mod cwd {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    static CWD_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that move the process working directory.
    pub struct CwdGuard {
        original: PathBuf,
        _lock: MutexGuard<'static, ()>,
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.original);
        }
    }

    pub fn lock() -> CwdGuard {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        CwdGuard {
            original: env::current_dir().unwrap_or_else(|_| env::temp_dir()),
            _lock: lock,
        }
    }

    /// A fresh, canonical directory under the system temp dir.
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("bpsh-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::canonicalize(&dir).unwrap()
    }
}
