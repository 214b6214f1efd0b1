// src/logic/mod.rs
//! ゲームのロジック (判定や探索) をまとめたモジュール。World の書き換えは systems の仕事！

pub mod auto_move;
pub mod deck;
pub mod rules;
