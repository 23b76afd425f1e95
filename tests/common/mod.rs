pub mod testnodes;
