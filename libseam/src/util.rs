#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

#[macro_export]
macro_rules! max_isize {
    // Base case:
    ($x:expr) => ($x);
    // `$x` followed by at least one `$y,`
    ($x:expr, $($y:expr),+) => (
        // Call `max_isize!` on the tail `$y`
        $x.max(max_isize!($($y),+))
    )
}
