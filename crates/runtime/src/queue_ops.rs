//! Deque and Heap operations
//!
//! Deque: O(1) push and pop at both ends. Heap: min-priority queue on a
//! numeric priority; values with equal priority come out in push order.
//! Popping or peeking an empty container fails with `EmptyContainer`.
//!
//! # Examples
//!
//! ```ignore
//! let h = heap_new();
//! heap_push(&h, &Value::Int(2), Value::from("a"))?;
//! heap_push(&h, &Value::Int(1), Value::from("b"))?;
//! heap_push(&h, &Value::Int(1), Value::from("c"))?;
//! heap_pop(&h)?;   // 'b'
//! heap_pop(&h)?;   // 'c'
//! heap_pop(&h)?;   // 'a'
//! ```

use crate::operand;
use dynval_core::value::Value;
use dynval_core::{RuntimeError, RuntimeResult};

fn empty(op: &'static str, container: &'static str) -> RuntimeError {
    RuntimeError::EmptyContainer { op, container }
}

// ---------------------------------------------------------------------------
// Deque
// ---------------------------------------------------------------------------

pub fn deque_new() -> Value {
    Value::deque(Vec::new())
}

pub fn deque_push_back(deque: &Value, value: Value) -> RuntimeResult<()> {
    operand::deque("deque_push_back", deque)?
        .borrow_mut()
        .push_back(value);
    Ok(())
}

pub fn deque_push_front(deque: &Value, value: Value) -> RuntimeResult<()> {
    operand::deque("deque_push_front", deque)?
        .borrow_mut()
        .push_front(value);
    Ok(())
}

pub fn deque_pop_front(deque: &Value) -> RuntimeResult<Value> {
    operand::deque("deque_pop_front", deque)?
        .borrow_mut()
        .pop_front()
        .ok_or_else(|| empty("deque_pop_front", "deque"))
}

pub fn deque_pop_back(deque: &Value) -> RuntimeResult<Value> {
    operand::deque("deque_pop_back", deque)?
        .borrow_mut()
        .pop_back()
        .ok_or_else(|| empty("deque_pop_back", "deque"))
}

pub fn deque_peek_front(deque: &Value) -> RuntimeResult<Value> {
    operand::deque("deque_peek_front", deque)?
        .borrow()
        .front()
        .cloned()
        .ok_or_else(|| empty("deque_peek_front", "deque"))
}

pub fn deque_peek_back(deque: &Value) -> RuntimeResult<Value> {
    operand::deque("deque_peek_back", deque)?
        .borrow()
        .back()
        .cloned()
        .ok_or_else(|| empty("deque_peek_back", "deque"))
}

pub fn deque_size(deque: &Value) -> RuntimeResult<Value> {
    let len = operand::deque("deque_size", deque)?.borrow().len();
    Ok(Value::Int(len as i64))
}

// ---------------------------------------------------------------------------
// Heap
// ---------------------------------------------------------------------------

pub fn heap_new() -> Value {
    Value::heap()
}

/// Push `value` with a numeric `priority`
pub fn heap_push(heap: &Value, priority: &Value, value: Value) -> RuntimeResult<()> {
    let heap = operand::heap("heap_push", heap)?;
    let priority = operand::number("heap_push", priority)?;
    heap.borrow_mut().push(priority, value);
    Ok(())
}

/// Remove and return the minimum-priority value (earliest push among ties)
pub fn heap_pop(heap: &Value) -> RuntimeResult<Value> {
    operand::heap("heap_pop", heap)?
        .borrow_mut()
        .pop()
        .ok_or_else(|| empty("heap_pop", "heap"))
}

pub fn heap_peek(heap: &Value) -> RuntimeResult<Value> {
    operand::heap("heap_peek", heap)?
        .borrow()
        .peek()
        .cloned()
        .ok_or_else(|| empty("heap_peek", "heap"))
}

pub fn heap_size(heap: &Value) -> RuntimeResult<Value> {
    let len = operand::heap("heap_size", heap)?.borrow().len();
    Ok(Value::Int(len as i64))
}
