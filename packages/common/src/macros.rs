//! Macros for writing result handlers with pattern matching syntax

/// Create a result handler from clean pattern matching syntax
///
/// Usage: `on_result_handler!(|result| { Ok(hash) => hash.to_hex(), Err(e) => e.to_string() })`
#[macro_export]
macro_rules! on_result_handler {
    (|$param:ident| { $($arms:tt)* }) => {
        |$param| match $param { $($arms)* }
    };
}

#[cfg(test)]
mod tests {
    fn apply<F: Fn(Result<u32, String>) -> u32>(handler: F) -> (u32, u32) {
        (handler(Ok(21)), handler(Err("failed".to_string())))
    }

    #[test]
    fn handler_macro_matches_arms() {
        let outcome = apply(on_result_handler!(|result| {
            Ok(value) => value * 2,
            Err(_) => 0,
        }));
        assert_eq!(outcome, (42, 0));
    }
}
