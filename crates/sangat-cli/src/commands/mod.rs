// Defined before the module list so every `*_ops` module sees it.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod print_ops;
pub mod registry_ops;
pub mod translit_ops;
