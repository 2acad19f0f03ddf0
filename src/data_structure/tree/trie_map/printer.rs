//! 树形结构打印，仅用于调试
//!
//! 示例，依次 put("cat", 1)、put("car", 2)：
//!```text
//!└──
//!    └── c
//!        └── a
//!            ├── (t) = 1
//!            └── (r) = 2
//!```

use super::Node;
use std::fmt::{self, Display, Write};

const TAIL: &str = "└── ";
const BRANCH: &str = "├── ";
const TAIL_INDENT: &str = "    ";
const BRANCH_INDENT: &str = "│   ";

///#### 渲染为字符串
pub fn render<V: Display>(root: &Node<V>) -> String {
    let mut res = String::new();
    //写入 String 不会失败
    let _ = write_tree(&mut res, root);
    res
}

///#### 以 root 为根，递归写出整棵树
pub fn write_tree<W: Write, V: Display>(w: &mut W, root: &Node<V>) -> fmt::Result {
    write_r(w, root, "", true)
}

//- @prefix: 当前层级的缩进前缀
//- @is_tail: 是否为同层最后一个子节点
fn write_r<W: Write, V: Display>(
    w: &mut W,
    node: &Node<V>,
    prefix: &str,
    is_tail: bool,
) -> fmt::Result {
    w.write_str(prefix)?;
    w.write_str(if is_tail { TAIL } else { BRANCH })?;
    match (node.character(), node.value()) {
        (Some(c), Some(v)) => write!(w, "({}) = {}", c, v)?,
        (Some(c), None) => w.write_char(c)?,
        //根节点无字符
        (None, _) => {}
    }
    w.write_char('\n')?;

    if let Some((last, rest)) = node.children().split_last() {
        let prefix = format!(
            "{}{}",
            prefix,
            if is_tail { TAIL_INDENT } else { BRANCH_INDENT }
        );
        for child in rest {
            write_r(w, child, &prefix, false)?;
        }
        write_r(w, last, &prefix, true)?;
    }

    Ok(())
}
