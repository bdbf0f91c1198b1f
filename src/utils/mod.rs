pub mod spvec;
pub mod topk;
