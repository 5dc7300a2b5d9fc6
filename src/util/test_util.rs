#![allow(non_snake_case)]
#![allow(dead_code)]

use crate::formulas::{Formula, FormulaFactory};

pub struct F {
    pub(crate) f: FormulaFactory,

    // Literals
    pub(crate) A: Formula,
    pub(crate) B: Formula,
    pub(crate) C: Formula,
    pub(crate) D: Formula,
    pub(crate) X: Formula,
    pub(crate) Y: Formula,
    pub(crate) NA: Formula,
    pub(crate) NB: Formula,
    pub(crate) NX: Formula,
    pub(crate) NY: Formula,

    // Disjunctions
    pub(crate) OR1: Formula,
    pub(crate) OR2: Formula,
    pub(crate) OR3: Formula,

    // Conjunctions
    pub(crate) AND1: Formula,
    pub(crate) AND2: Formula,
    pub(crate) AND3: Formula,

    // Negations
    pub(crate) NOT1: Formula,
    pub(crate) NOT2: Formula,

    // Implications
    pub(crate) IMP1: Formula,
    pub(crate) IMP2: Formula,
    pub(crate) IMP3: Formula,

    // Equivalences
    pub(crate) EQ1: Formula,
    pub(crate) EQ2: Formula,
}

impl F {
    pub(crate) fn new() -> Self {
        let f = FormulaFactory::new();

        let A = f.variable("a");
        let B = f.variable("b");
        let C = f.variable("c");
        let D = f.variable("d");
        let X = f.variable("x");
        let Y = f.variable("y");
        let NA = f.literal("a", false);
        let NB = f.literal("b", false);
        let NX = f.literal("x", false);
        let NY = f.literal("y", false);

        let OR1 = f.or(&[X.clone(), Y.clone()]);
        let OR2 = f.or(&[NX.clone(), NY.clone()]);
        let AND1 = f.and(&[A.clone(), B.clone()]);
        let AND2 = f.and(&[NA.clone(), NB.clone()]);

        let OR3 = f.or(&[AND1.clone(), AND2.clone()]);
        let AND3 = f.and(&[OR1.clone(), OR2.clone()]);

        let NOT1 = f.not(AND1.clone());
        let NOT2 = f.not(OR1.clone());

        let IMP1 = f.implication(A.clone(), B.clone());
        let IMP2 = f.implication(NA.clone(), NB.clone());
        let IMP3 = f.implication(AND1.clone(), OR1.clone());

        let EQ1 = f.equivalence(A.clone(), B.clone());
        let EQ2 = f.equivalence(AND1.clone(), OR1.clone());

        Self {
            f,
            A,
            B,
            C,
            D,
            X,
            Y,
            NA,
            NB,
            NX,
            NY,
            OR1,
            OR2,
            OR3,
            AND1,
            AND2,
            AND3,
            NOT1,
            NOT2,
            IMP1,
            IMP2,
            IMP3,
            EQ1,
            EQ2,
        }
    }
}
