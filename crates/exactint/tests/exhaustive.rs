// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use exactint::composite::{
    add_div, add_div_rem, add_one_sub_div, add_sub, add_sub_div, sub_div, sub_div_rem,
};
use exactint::multi::{add3, div3, mul3, sub3};
use exactint::{ArithError, Result, add, div, inc, iter, mul, rem, step, sub};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn fit_i8(exact: i32) -> Result<i8> {
    i8::try_from(exact).map_err(|_| ArithError::Overflow)
}

fn fit_u8(exact: i32) -> Result<u8> {
    u8::try_from(exact).map_err(|_| ArithError::Overflow)
}

/// Counts successes and failures so each test can show it hit both.
#[derive(Default)]
struct Outcomes {
    ok: usize,
    overflow: usize,
}

impl Outcomes {
    fn record<T>(&mut self, result: &Result<T>) {
        match result {
            Ok(_) => self.ok += 1,
            Err(ArithError::Overflow) => self.overflow += 1,
            Err(_) => {}
        }
    }

    fn assert_both(&self) {
        assert!(self.ok > 0, "no successful evaluation");
        assert!(self.overflow > 0, "no overflowing evaluation");
    }
}

#[test]
fn test_binary_primitives_i8() {
    let mut outcomes = Outcomes::default();
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let (wa, wb) = (a as i32, b as i32);
            let sum = add(a, b);
            outcomes.record(&sum);
            assert_eq!(sum, fit_i8(wa + wb), "{a} + {b}");
            assert_eq!(sub(a, b), fit_i8(wa - wb), "{a} - {b}");
            assert_eq!(mul(a, b), fit_i8(wa * wb), "{a} * {b}");
            if b == 0 {
                assert_eq!(div(a, b), Err(ArithError::DivisionByZero));
                assert_eq!(rem(a, b), Err(ArithError::DivisionByZero));
            } else {
                assert_eq!(div(a, b), fit_i8(wa / wb), "{a} / {b}");
                assert_eq!(rem(a, b), fit_i8(wa % wb), "{a} % {b}");
            }
        }
    }
    outcomes.assert_both();
}

#[test]
fn test_binary_primitives_u8() {
    let mut outcomes = Outcomes::default();
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            let (wa, wb) = (a as i32, b as i32);
            let difference = sub(a, b);
            outcomes.record(&difference);
            assert_eq!(add(a, b), fit_u8(wa + wb), "{a} + {b}");
            assert_eq!(difference, fit_u8(wa - wb), "{a} - {b}");
            assert_eq!(mul(a, b), fit_u8(wa * wb), "{a} * {b}");
            if b == 0 {
                assert_eq!(div(a, b), Err(ArithError::DivisionByZero));
            } else {
                assert_eq!(div(a, b), fit_u8(wa / wb), "{a} / {b}");
                assert_eq!(rem(a, b), fit_u8(wa % wb), "{a} % {b}");
            }
        }
    }
    outcomes.assert_both();
}

#[test]
fn test_composites_i8() {
    let mut outcomes = Outcomes::default();
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let (wa, wb) = (a as i32, b as i32);
            for c in i8::MIN..=i8::MAX {
                let wc = c as i32;
                assert_eq!(add_sub(a, b, c), fit_i8(wa + wb - wc), "{a} + {b} - {c}");
                if c == 0 {
                    assert_eq!(add_div(a, b, c), Err(ArithError::DivisionByZero));
                    assert_eq!(sub_div_rem(a, b, c), Err(ArithError::DivisionByZero));
                    continue;
                }
                let quotient = add_div(a, b, c);
                outcomes.record(&quotient);
                assert_eq!(quotient, fit_i8((wa + wb) / wc), "({a} + {b}) / {c}");
                assert_eq!(sub_div(a, b, c), fit_i8((wa - wb) / wc), "({a} - {b}) / {c}");
                assert_eq!(add_div_rem(a, b, c), fit_i8((wa + wb) % wc), "({a} + {b}) % {c}");
                assert_eq!(sub_div_rem(a, b, c), fit_i8((wa - wb) % wc), "({a} - {b}) % {c}");
                assert_eq!(
                    add_one_sub_div(a, b, c),
                    fit_i8((wa + 1 - wb) / wc),
                    "({a} + 1 - {b}) / {c}"
                );
            }
        }
    }
    outcomes.assert_both();
}

#[test]
fn test_composites_u8() {
    let mut outcomes = Outcomes::default();
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            let (wa, wb) = (a as i32, b as i32);
            for c in u8::MIN..=u8::MAX {
                let wc = c as i32;
                assert_eq!(add_sub(a, b, c), fit_u8(wa + wb - wc), "{a} + {b} - {c}");
                if c == 0 {
                    assert_eq!(sub_div(a, b, c), Err(ArithError::DivisionByZero));
                    continue;
                }
                let quotient = sub_div(a, b, c);
                outcomes.record(&quotient);
                assert_eq!(add_div(a, b, c), fit_u8((wa + wb) / wc), "({a} + {b}) / {c}");
                assert_eq!(quotient, fit_u8((wa - wb) / wc), "({a} - {b}) / {c}");
                assert_eq!(add_div_rem(a, b, c), fit_u8((wa + wb) % wc), "({a} + {b}) % {c}");
                assert_eq!(sub_div_rem(a, b, c), fit_u8((wa - wb) % wc), "({a} - {b}) % {c}");
                assert_eq!(
                    add_one_sub_div(a, b, c),
                    fit_u8((wa + 1 - wb) / wc),
                    "({a} + 1 - {b}) / {c}"
                );
            }
        }
    }
    outcomes.assert_both();
}

/// Truncating chain `a / b / c`; `None` when a divisor is zero.
fn div_chain(a: i32, b: i32, c: i32) -> Option<i32> {
    if b == 0 || c == 0 {
        None
    } else {
        Some(a / b / c)
    }
}

#[test]
fn test_three_operand_multi_i8() {
    let mut outcomes = Outcomes::default();
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            for c in i8::MIN..=i8::MAX {
                let (wa, wb, wc) = (a as i32, b as i32, c as i32);
                let sum = add3(a, b, c);
                outcomes.record(&sum);
                assert_eq!(sum, fit_i8(wa + wb + wc), "{a} + {b} + {c}");
                assert_eq!(sub3(a, b, c), fit_i8(wa - wb - wc), "{a} - {b} - {c}");
                assert_eq!(mul3(a, b, c), fit_i8(wa * wb * wc), "{a} * {b} * {c}");
                let quotient = div_chain(wa, wb, wc)
                    .map_or(Err(ArithError::DivisionByZero), fit_i8);
                assert_eq!(div3(a, b, c), quotient, "{a} / {b} / {c}");
            }
        }
    }
    outcomes.assert_both();
}

#[test]
fn test_three_operand_multi_u8() {
    let mut outcomes = Outcomes::default();
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            for c in u8::MIN..=u8::MAX {
                let (wa, wb, wc) = (a as i32, b as i32, c as i32);
                let difference = sub3(a, b, c);
                outcomes.record(&difference);
                assert_eq!(add3(a, b, c), fit_u8(wa + wb + wc), "{a} + {b} + {c}");
                assert_eq!(difference, fit_u8(wa - wb - wc), "{a} - {b} - {c}");
                assert_eq!(mul3(a, b, c), fit_u8(wa * wb * wc), "{a} * {b} * {c}");
                let quotient = div_chain(wa, wb, wc)
                    .map_or(Err(ArithError::DivisionByZero), fit_u8);
                assert_eq!(div3(a, b, c), quotient, "{a} / {b} / {c}");
            }
        }
    }
    outcomes.assert_both();
}

#[test]
fn test_add_sub_div_sampled_i8() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut outcomes = Outcomes::default();
    for _ in 0..500_000 {
        let (a, b, c, d): (i8, i8, i8, i8) = (rng.random(), rng.random(), rng.random(), rng.random());
        let result = add_sub_div(a, b, c, d);
        if d == 0 {
            assert_eq!(result, Err(ArithError::DivisionByZero));
            continue;
        }
        outcomes.record(&result);
        let exact = (a as i32 + b as i32 - c as i32) / d as i32;
        assert_eq!(result, fit_i8(exact), "({a} + {b} - {c}) / {d}");
    }
    outcomes.assert_both();
}

#[test]
fn test_iteration_reaches_type_maximum() {
    assert_eq!(iter(126i8, 127).collect::<Vec<_>>(), vec![126, 127]);
    assert_eq!(inc(u8::MAX - 1, u8::MAX).count(), 2);
    assert_eq!(step(126i8, 127, 2).collect::<Vec<_>>(), vec![(0, 126)]);
    assert_eq!(iter(i8::MIN, i8::MAX).count(), 256);
}
