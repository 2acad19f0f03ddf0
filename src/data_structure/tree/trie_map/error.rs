//! TrieMap 错误类型
//!
//!- @EmptyKey: 键长度为 0
//!- @UnsupportedOperation: 键值映射不支持的操作(如仅有键、没有值的 add)

error_chain! {
    errors {
        EmptyKey {
            description("Empty key!")
            display("Empty key: key must contain at least one character!")
        }
        UnsupportedOperation(op: &'static str) {
            description("Unsupported operation!")
            display("Unsupported operation: {}!", op)
        }
    }
}
