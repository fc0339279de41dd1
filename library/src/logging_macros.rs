// Logging macros that tag every record with "[prepatch]".
//
// Outside of tests the records go through the `log` facade. Under test they
// are printed so the harness shows them next to the output of the failing
// test instead of needing a logger installed.

#[cfg(test)]
macro_rules! prepatch_log {
    ($level:ident, $fmt:expr $(, $($arg:tt)*)?) => {
        println!(concat!("[prepatch] ", stringify!($level), ": ", $fmt), $($($arg)*)?)
    };
}

#[cfg(not(test))]
macro_rules! prepatch_log {
    ($level:ident, $fmt:expr $(, $($arg:tt)*)?) => {
        log::$level!(concat!("[prepatch] ", $fmt), $($($arg)*)?)
    };
}

// prepatch_debug!("wrote {} bytes", 12)
macro_rules! prepatch_debug {
    ($($t:tt)*) => { prepatch_log!(debug, $($t)*) };
}

macro_rules! prepatch_warn {
    ($($t:tt)*) => { prepatch_log!(warn, $($t)*) };
}

// Failures that are also reported on the status stream.
macro_rules! prepatch_error {
    ($($t:tt)*) => { prepatch_log!(error, $($t)*) };
}
