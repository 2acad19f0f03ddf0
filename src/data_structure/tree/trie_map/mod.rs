//! ## TrieMap
//!
//! #### 算法说明
//! - 以前缀树存储 key->value 映射，即关联数组；
//! - 每条边对应一个字符，自根向下的路径拼出已存储键的前缀；
//! - 子节点以有序 Vec 存储，线性查找，适用于字母表有限、分支较少的场景。
//!
//! #### 应用场景
//! - 字符串键的数据检索。
//!
//! #### 实现属性
//! - <font color=Red>×</font> 多线程安全
//! - <font color=Green>√</font> 无 unsafe 代码
//!
//! #### Example
//!```
//! use trie_map::TrieMap;
//!
//! let mut map = TrieMap::new();
//! assert!(map.put("cat", 1).unwrap());
//! assert!(map.put("car", 2).unwrap());
//! assert!(!map.put("cat", 99).unwrap());
//!
//! assert_eq!(Some(&1), map.get("cat").unwrap());
//! assert_eq!(None, map.get("ca").unwrap());
//! assert_eq!(2, map.len());
//!```
//!
//! 键值映射不提供只有键的 add 操作：
//!```compile_fail
//! use trie_map::TrieMap;
//!
//! let mut map: TrieMap<i32> = TrieMap::new();
//! map.add("cat");
//!```

pub mod error;
pub mod printer;


use error::{ErrorKind, Result};
use std::fmt;

//- @root: 根节点，不含字符
//- @size: 已存储的键数量
pub struct TrieMap<V> {
    root: Node<V>,
    size: usize,
}

//- @character: 本节点对应的字符，根节点为 None
//- @value: 是键的终点时为 Some，否则为 None
//- @children: 子节点，字符两两不同
pub struct Node<V> {
    character: Option<char>,
    value: Option<V>,
    children: Vec<Node<V>>,
}

impl<V> Node<V> {
    fn root() -> Node<V> {
        Node {
            character: None,
            value: None,
            children: vec![],
        }
    }

    //中间节点，仅表示前缀
    fn new(character: char) -> Node<V> {
        Node {
            character: Some(character),
            value: None,
            children: Vec::with_capacity(1),
        }
    }

    //终点节点
    fn with_value(character: char, value: V) -> Node<V> {
        Node {
            character: Some(character),
            value: Some(value),
            children: Vec::with_capacity(0),
        }
    }

    #[inline(always)]
    pub fn character(&self) -> Option<char> {
        self.character
    }

    ///- #: 是否为某个键的终点
    #[inline(always)]
    pub fn is_word(&self) -> bool {
        self.value.is_some()
    }

    #[inline(always)]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    ///#### 按字符查找子节点
    ///- #: 找到返回其下标，否则返回 None
    pub fn child_index(&self, c: char) -> Option<usize> {
        self.children.iter().position(|n| n.character == Some(c))
    }

    #[inline(always)]
    pub fn child(&self, idx: usize) -> Option<&Node<V>> {
        self.children.get(idx)
    }

    #[inline(always)]
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    #[inline(always)]
    pub fn children(&self) -> &[Node<V>] {
        &self.children
    }

    //不做去重检查，由调用方保证字符唯一
    fn add_child(&mut self, node: Node<V>) -> usize {
        self.children.push(node);
        self.children.len() - 1
    }
}

impl<V> TrieMap<V> {
    pub fn new() -> TrieMap<V> {
        TrieMap {
            root: Node::root(),
            size: 0,
        }
    }

    #[inline(always)]
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    ///- #: 已存储的键数量
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        0 == self.size
    }

    ///#### 插入数据
    ///- @key[in]: 长度至少为 1
    ///- @value[in]: 键对应的值
    ///- #: 新插入返回 true；键已存在时不覆盖，返回 false
    pub fn put(&mut self, key: &str, value: V) -> Result<bool> {
        let mut chars = key.chars();
        let last = match chars.next_back() {
            Some(c) => c,
            None => bail!(ErrorKind::EmptyKey),
        };

        //沿已有路径下行，缺失的前缀节点就地创建
        let mut prev = &mut self.root;
        for c in chars {
            let idx = match prev.child_index(c) {
                Some(i) => i,
                None => {
                    trace!("new prefix node: {:?}", c);
                    prev.add_child(Node::new(c))
                }
            };
            prev = &mut prev.children[idx];
        }

        match prev.child_index(last) {
            Some(i) => {
                let n = &mut prev.children[i];
                if n.is_word() {
                    debug!("key exists: {:?}", key);
                    return Ok(false);
                }
                //已有前缀节点升级为终点节点
                n.value = Some(value);
            }
            None => {
                trace!("new word node: {:?}", last);
                prev.add_child(Node::with_value(last, value));
            }
        }

        self.size += 1;
        debug!("key inserted: {:?}, size: {}", key, self.size);
        Ok(true)
    }

    ///#### 查询数据
    ///- @key[in]: 长度至少为 1
    ///- #: 键存在返回 Some(&value)，否则返回 None
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        if key.is_empty() {
            bail!(ErrorKind::EmptyKey);
        }

        let mut n = &self.root;
        for c in key.chars() {
            match n.child_index(c) {
                Some(i) => n = &n.children[i],
                None => return Ok(None),
            }
        }

        //落在仅表示前缀的节点上时，value 为 None
        Ok(n.value())
    }

    ///#### 检查键是否存在
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        self.get(key).map(|v| v.is_some())
    }
}

impl<V> Default for TrieMap<V> {
    fn default() -> TrieMap<V> {
        TrieMap::new()
    }
}

impl<V: fmt::Display> fmt::Display for TrieMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        printer::write_tree(f, &self.root)
    }
}
