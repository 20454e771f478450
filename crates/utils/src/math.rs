//! Math utilities

/// Số Fibonacci thứ `n` (fib(0) = 0, fib(1) = 1). Trả về `None` nếu tràn u64.
pub fn fibonacci(n: u32) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// Giai thừa `n!`, `None` nếu tràn u64
pub fn factorial(n: u32) -> Option<u64> {
    (1..=u64::from(n)).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Kiểm tra số nguyên tố (trial division)
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
