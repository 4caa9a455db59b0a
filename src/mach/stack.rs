use super::MAX_CALL_DEPTH;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    underflow: ErrorCode,
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow: ErrorCode, overflow_message: &'static str) -> Stack<T> {
        Stack {
            underflow,
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        MAX_CALL_DEPTH
    }
    fn overflow_error(&self) -> Error {
        Error::new(ErrorCode::OutOfMemory).message(self.overflow_message)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(self.overflow_error());
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_in_first_out() {
        let mut s: Stack<isize> = Stack::new(ErrorCode::EndprocWithoutProc, "CALL STACK");
        s.push(3).unwrap();
        s.push(7).unwrap();
        assert_eq!(s.last(), Some(&7));
        assert_eq!(s.pop(), Ok(7));
        assert_eq!(s.pop(), Ok(3));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<isize> = Stack::new(ErrorCode::EndprocWithoutProc, "CALL STACK");
        assert_eq!(
            s.pop().map_err(|e| e.code()),
            Err(ErrorCode::EndprocWithoutProc)
        );
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<usize> = Stack::new(ErrorCode::EndprocWithoutProc, "CALL STACK");
        for i in 0..MAX_CALL_DEPTH {
            s.push(i).unwrap();
        }
        assert_eq!(
            s.push(0).map_err(|e| e.to_string()),
            Err("OUT OF MEMORY; CALL STACK".to_string())
        );
        assert_eq!(s.len(), MAX_CALL_DEPTH);
    }
}
